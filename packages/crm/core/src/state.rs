use crate::config::ClientConfig;
use crate::form::EntryForm;
use crate::list::ListView;
use crate::store::InteractionStore;

/// Reachability of the backend, as last reported by its root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online(String),
    Unreachable(String),
}

/// Everything the application knows. Owned by the application root and only
/// changed through [`crate::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub config: ClientConfig,

    /// Logged interactions and the fetch/add lifecycles
    pub store: InteractionStore,

    /// Log-interaction form, including the AI notes pane
    pub form: EntryForm,

    /// Hiding the form tears it down
    pub form_visible: bool,

    pub list: ListView,

    /// Blocking notification; the UI keeps it on top until dismissed
    pub notice: Option<String>,

    pub backend: BackendStatus,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            store: InteractionStore::new(),
            form: EntryForm::default(),
            form_visible: true,
            list: ListView::default(),
            notice: None,
            backend: BackendStatus::Unknown,
        }
    }

    /// True while any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.store.fetch_operation().is_pending()
            || self.store.add_operation().is_pending()
            || self.form.is_processing()
            || self.list.detail_op.is_pending()
            || self.backend == BackendStatus::Checking
    }
}
