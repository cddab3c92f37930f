use crate::{actions::Action, effects::Effect, form::FormField, state::*, store::Status, types::NewInteraction};

/// Pure state transition function
/// Returns new state and any effects that need to be performed
pub fn reduce(state: &AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut new_state = state.clone();
    let mut effects = Vec::new();

    match action {
        // Entry form
        Action::EditField { field, value } => {
            // The notes pane is read-only while its text is being processed
            let locked = *field == FormField::RawNotes && new_state.form.is_processing();
            if !locked {
                new_state.form.set_field(*field, value.clone());
            }
        }

        Action::EditSentiment(sentiment) => {
            new_state.form.hcp_sentiment = *sentiment;
        }

        Action::SubmitForm => {
            if new_state.store.add_operation().is_pending() {
                return (new_state, effects);
            }
            new_state.store.reset_add_status();
            new_state.form.invalidate_dismissal();

            match new_state.form.submission() {
                Ok(payload) => begin_add(&mut new_state, &mut effects, payload),
                Err(err) => new_state.notice = Some(err.to_string()),
            }
        }

        Action::ProcessNotes => {
            if !new_state.form.is_processing() {
                if let Some(ticket) = new_state.form.begin_processing() {
                    effects.push(Effect::ProcessNotes {
                        ticket,
                        text: new_state.form.raw_notes.clone(),
                    });
                }
            }
        }

        Action::NotesProcessed { ticket, result } => {
            new_state.form.finish_processing(*ticket, result.clone());
        }

        Action::AddStatusElapsed { token } => {
            if new_state.form_visible && *token == new_state.form.dismiss_token() {
                new_state.store.reset_add_status();
                new_state.form.invalidate_dismissal();
            }
        }

        Action::ShowEntryForm => {
            if !new_state.form_visible {
                new_state.form_visible = true;
                // A freshly shown form picks up an add outcome it missed
                schedule_add_dismissal(&mut new_state, &mut effects);
            }
        }

        Action::HideEntryForm => {
            if new_state.form_visible {
                new_state.form_visible = false;
                new_state.form.tear_down();
            }
        }

        Action::DismissNotice => {
            new_state.notice = None;
        }

        // Interaction store
        Action::FetchInteractions => {
            begin_fetch(&mut new_state, &mut effects);
        }

        Action::InteractionsFetched { ticket, result } => {
            new_state.store.finish_fetch(*ticket, result.clone());
        }

        Action::AddInteraction(payload) => {
            if !new_state.store.add_operation().is_pending() {
                begin_add(&mut new_state, &mut effects, payload.clone());
            }
        }

        Action::InteractionAdded { ticket, result } => {
            if new_state.store.finish_add(*ticket, result.clone()) && new_state.form_visible {
                schedule_add_dismissal(&mut new_state, &mut effects);
            }
        }

        Action::ResetAddStatus => {
            new_state.store.reset_add_status();
            new_state.form.invalidate_dismissal();
        }

        // Interaction list
        Action::ListMounted => {
            new_state.list.mounted = true;
        }

        Action::Refresh => {
            if !new_state.store.fetch_operation().is_pending() {
                begin_fetch(&mut new_state, &mut effects);
            }
        }

        Action::SelectInteraction(id) => {
            let ticket = new_state.list.begin_detail(id.clone());
            effects.push(Effect::FetchInteraction {
                ticket,
                id: id.clone(),
            });
        }

        Action::InteractionLoaded { ticket, result } => {
            new_state.list.finish_detail(*ticket, result.clone());
        }

        Action::CloseDetail => {
            new_state.list.close_detail();
        }

        // Backend
        Action::CheckBackend => {
            new_state.backend = BackendStatus::Checking;
            effects.push(Effect::CheckBackend);
        }

        Action::BackendChecked(Ok(health)) => {
            new_state.backend = BackendStatus::Online(health.message.clone());
        }

        Action::BackendChecked(Err(error)) => {
            new_state.backend = BackendStatus::Unreachable(error.to_string());
        }
    }

    (new_state, effects)
}

/// What the mounted list does when it observes the state: fetch whenever the
/// fetch lifecycle sits at idle. Runs after every reduction.
pub fn follow_up(state: &AppState) -> Option<Action> {
    if state.list.mounted && state.store.status() == Status::Idle {
        Some(Action::FetchInteractions)
    } else {
        None
    }
}

/// Reduces `action`, then keeps applying [`follow_up`] until the state
/// settles. Effects from every step are collected in order.
pub fn dispatch(state: &AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let (mut state, mut effects) = reduce(state, action);
    while let Some(next) = follow_up(&state) {
        let (settled, more) = reduce(&state, &next);
        state = settled;
        effects.extend(more);
    }
    (state, effects)
}

fn begin_fetch(state: &mut AppState, effects: &mut Vec<Effect>) {
    let ticket = state.store.begin_fetch();
    effects.push(Effect::FetchInteractions {
        ticket,
        limit: state.config.fetch_limit,
    });
}

fn begin_add(state: &mut AppState, effects: &mut Vec<Effect>, payload: NewInteraction) {
    let ticket = state.store.begin_add();
    state.form.invalidate_dismissal();
    effects.push(Effect::CreateInteraction { ticket, payload });
}

/// Reacts to a terminal add status the way the form does on screen: a success
/// clears the inputs, and either outcome gets an auto-reset timer.
fn schedule_add_dismissal(state: &mut AppState, effects: &mut Vec<Effect>) {
    let after = match state.store.add_status() {
        Status::Succeeded => {
            state.form.clear();
            state.config.success_display
        }
        Status::Failed => state.config.failure_display,
        Status::Idle | Status::Loading => return,
    };
    let token = state.form.invalidate_dismissal();
    effects.push(Effect::ScheduleAddStatusReset { token, after });
}
