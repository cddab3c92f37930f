use std::time::Duration;

use crate::store::Ticket;
use crate::types::*;

/// Side effects that need to be performed (API calls, timers)
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `GET /interactions/?limit=<limit>`
    FetchInteractions { ticket: Ticket, limit: u32 },

    /// `POST /interactions/`
    CreateInteraction {
        ticket: Ticket,
        payload: NewInteraction,
    },

    /// `POST /interactions/process-text/`
    ProcessNotes { ticket: Ticket, text: String },

    /// `GET /interactions/{id}`
    FetchInteraction { ticket: Ticket, id: InteractionId },

    /// Dispatch `AddStatusElapsed { token }` once `after` has passed
    ScheduleAddStatusReset { token: Ticket, after: Duration },

    /// `GET /`
    CheckBackend,
}
