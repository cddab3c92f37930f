use hcp_crm_core::{Action, Effect};
use iced::Task as Command;

use crate::api::ApiClient;
use crate::app::Message;

/// Turns reducer effects into iced tasks. Every task resolves to the
/// completion action carrying the ticket it was started with.
pub fn handle_effects(api: &ApiClient, effects: Vec<Effect>) -> Command<Message> {
    if effects.is_empty() {
        return Command::none();
    }
    Command::batch(effects.into_iter().map(|effect| perform(api.clone(), effect)))
}

fn perform(api: ApiClient, effect: Effect) -> Command<Message> {
    log_debug!("effects", "performing {:?}", effect);

    match effect {
        Effect::FetchInteractions { ticket, limit } => Command::perform(
            async move { api.list_interactions(limit).await },
            move |result| Message::Core(Action::InteractionsFetched { ticket, result }),
        ),

        Effect::CreateInteraction { ticket, payload } => Command::perform(
            async move { api.create_interaction(&payload).await },
            move |result| Message::Core(Action::InteractionAdded { ticket, result }),
        ),

        Effect::ProcessNotes { ticket, text } => Command::perform(
            async move { api.process_text(text).await },
            move |result| Message::Core(Action::NotesProcessed { ticket, result }),
        ),

        Effect::FetchInteraction { ticket, id } => Command::perform(
            async move { api.get_interaction(&id).await },
            move |result| Message::Core(Action::InteractionLoaded { ticket, result }),
        ),

        Effect::ScheduleAddStatusReset { token, after } => Command::perform(
            tokio::time::sleep(after),
            move |_| Message::Core(Action::AddStatusElapsed { token }),
        ),

        Effect::CheckBackend => Command::perform(
            async move { api.health().await },
            |result| Message::Core(Action::BackendChecked(result)),
        ),
    }
}
