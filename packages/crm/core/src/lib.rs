pub mod actions;
pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod format;
pub mod list;
pub mod reducer;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use actions::Action;
pub use config::ClientConfig;
pub use effects::Effect;
pub use error::{RequestError, ValidationError};
pub use form::{EntryForm, FormField};
pub use reducer::{dispatch, follow_up, reduce};
pub use state::{AppState, BackendStatus};
pub use store::{InteractionStore, Operation, Status, Ticket};
