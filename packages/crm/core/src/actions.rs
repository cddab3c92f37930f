use crate::error::RequestError;
use crate::form::FormField;
use crate::store::Ticket;
use crate::types::*;

/// Everything that can change [`crate::AppState`]: user intents and request
/// completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Entry form
    EditField { field: FormField, value: String },
    EditSentiment(Sentiment),
    SubmitForm,
    ProcessNotes,
    NotesProcessed {
        ticket: Ticket,
        result: Result<ExtractedInteraction, RequestError>,
    },
    AddStatusElapsed { token: Ticket },
    ShowEntryForm,
    HideEntryForm,
    DismissNotice,

    // Interaction store
    FetchInteractions,
    InteractionsFetched {
        ticket: Ticket,
        result: Result<Vec<Interaction>, RequestError>,
    },
    AddInteraction(NewInteraction),
    InteractionAdded {
        ticket: Ticket,
        result: Result<CreateInteractionResponse, RequestError>,
    },
    ResetAddStatus,

    // Interaction list
    ListMounted,
    Refresh,
    SelectInteraction(InteractionId),
    InteractionLoaded {
        ticket: Ticket,
        result: Result<Interaction, RequestError>,
    },
    CloseDetail,

    // Backend
    CheckBackend,
    BackendChecked(Result<HealthResponse, RequestError>),
}
