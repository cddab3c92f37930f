use hcp_crm_core::{dispatch, Action, FormField};
use iced::widget::text_editor;
use iced::Task as Command;

use super::{CrmApp, Message};

impl CrmApp {
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Core(action) => self.dispatch(action),

            Message::NotesEdited(edit) => {
                let is_edit = edit.is_edit();
                self.notes.perform(edit);
                if !is_edit {
                    // Cursor movement and selection stay local to the editor
                    return Command::none();
                }
                self.dispatch(Action::EditField {
                    field: FormField::RawNotes,
                    value: editor_text(&self.notes),
                })
            }

            Message::Tick => Command::none(),
        }
    }

    pub(crate) fn dispatch(&mut self, action: Action) -> Command<Message> {
        log_debug!("update", "Dispatching {:?}", action);

        let (new_state, effects) = dispatch(&self.state, &action);
        if new_state.notice != self.state.notice {
            if let Some(notice) = &new_state.notice {
                log_info!("update", "Showing notice: {}", notice);
            }
        }
        self.state = new_state;
        self.sync_notes();

        log_debug!("update", "Action produced {} effects", effects.len());
        crate::effects::handle_effects(&self.api, effects)
    }

    /// The reducer can rewrite the notes (clearing after a successful add,
    /// tearing the form down). Reload the editor buffer when that happens.
    fn sync_notes(&mut self) {
        let notes = &self.state.form.raw_notes;
        if *notes != editor_text(&self.notes) {
            self.notes = text_editor::Content::with_text(notes);
        }
    }
}

/// Editor contents without the trailing newline `Content::text` reports.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
