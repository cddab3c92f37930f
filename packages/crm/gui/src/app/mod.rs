mod update;

use hcp_crm_core::{Action, AppState, ClientConfig};
use iced::time::{self, Duration};
use iced::widget::text_editor;
use iced::{Element, Subscription, Task as Command};

use crate::api::ApiClient;
use crate::components::spinner::Spinner;

pub struct CrmApp {
    pub state: AppState,
    pub api: ApiClient,
    /// Editor buffer behind the AI notes pane. Mirrors `state.form.raw_notes`.
    pub notes: text_editor::Content,
    pub spinner: Spinner,
}

#[derive(Debug, Clone)]
pub enum Message {
    Core(Action),
    NotesEdited(text_editor::Action),
    /// Animation frame while something is loading
    Tick,
}

impl CrmApp {
    pub fn new(config: ClientConfig, api: ApiClient) -> (Self, Command<Message>) {
        let mut app = Self {
            state: AppState::new(config),
            api,
            notes: text_editor::Content::new(),
            spinner: Spinner::default(),
        };

        let startup = vec![
            app.dispatch(Action::CheckBackend),
            app.dispatch(Action::ListMounted),
        ];

        (app, Command::batch(startup))
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.state.is_busy() {
            time::every(Duration::from_millis(80)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::views::view_root(self)
    }
}
