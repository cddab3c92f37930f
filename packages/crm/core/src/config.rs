use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const INTERACTIONS_PATH: &str = "/interactions/";
pub const PROCESS_TEXT_PATH: &str = "/interactions/process-text/";
pub const HEALTH_PATH: &str = "/";

/// Client settings. Everything has a fixed default; nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Page-size cap sent with every list request.
    pub fetch_limit: u32,
    /// How long a successful add stays on screen.
    pub success_display: Duration,
    /// How long a failed add stays on screen.
    pub failure_display: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            fetch_limit: 200,
            success_display: Duration::from_secs(3),
            failure_display: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

pub fn list_path(limit: u32) -> String {
    format!("{}?limit={}", INTERACTIONS_PATH, limit)
}

pub fn interaction_path(id: &crate::types::InteractionId) -> String {
    format!("{}{}", INTERACTIONS_PATH, id)
}
