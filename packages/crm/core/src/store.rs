use crate::error::RequestError;
use crate::types::{CreateInteractionResponse, Interaction};

pub const FETCH_FALLBACK: &str = "Failed to fetch interactions";
pub const ADD_FALLBACK: &str = "Failed to add interaction";

/// Identifies one in-flight request. Completions carrying any other ticket
/// are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    pub fn next(self) -> Ticket {
        Ticket(self.0.wrapping_add(1))
    }
}

/// Lifecycle of one async operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Idle,
    Pending(Ticket),
    Succeeded,
    Failed(String),
}

impl Operation {
    pub fn status(&self) -> Status {
        match self {
            Operation::Idle => Status::Idle,
            Operation::Pending(_) => Status::Loading,
            Operation::Succeeded => Status::Succeeded,
            Operation::Failed(_) => Status::Failed,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Operation::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Operation::Pending(_))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        *self == Operation::Pending(ticket)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The list of logged interactions plus the fetch and add lifecycles.
///
/// Only the methods below mutate it. Items are replaced wholesale by a
/// successful fetch and never patched locally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionStore {
    items: Vec<Interaction>,
    fetch: Operation,
    add: Operation,
    last_ticket: Ticket,
}

impl InteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Interaction] {
        &self.items
    }

    pub fn status(&self) -> Status {
        self.fetch.status()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    pub fn add_status(&self) -> Status {
        self.add.status()
    }

    pub fn add_error(&self) -> Option<&str> {
        self.add.error()
    }

    pub fn fetch_operation(&self) -> &Operation {
        &self.fetch
    }

    pub fn add_operation(&self) -> &Operation {
        &self.add
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        self.fetch = Operation::Pending(ticket);
        ticket
    }

    /// Applies a fetch result. Returns `false` if `ticket` is stale.
    pub fn finish_fetch(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Interaction>, RequestError>,
    ) -> bool {
        if !self.fetch.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.fetch = Operation::Succeeded;
            }
            Err(err) => {
                self.fetch = Operation::Failed(err.user_message(FETCH_FALLBACK));
            }
        }
        true
    }

    pub fn begin_add(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        self.add = Operation::Pending(ticket);
        ticket
    }

    /// Applies a create result. On success the fetch lifecycle drops back to
    /// idle so the list pulls the authoritative collection again.
    pub fn finish_add(
        &mut self,
        ticket: Ticket,
        result: Result<CreateInteractionResponse, RequestError>,
    ) -> bool {
        if !self.add.is_current(ticket) {
            return false;
        }
        match result {
            Ok(_) => {
                self.add = Operation::Succeeded;
                self.fetch = Operation::Idle;
            }
            Err(err) => {
                self.add = Operation::Failed(err.user_message(ADD_FALLBACK));
            }
        }
        true
    }

    /// Back to idle with no error. Also orphans any pending add.
    pub fn reset_add_status(&mut self) {
        self.add = Operation::Idle;
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket = self.last_ticket.next();
        self.last_ticket
    }
}
