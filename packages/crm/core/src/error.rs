use serde_json::Value;
use thiserror::Error;

/// Failure of a single backend call. Nothing is retried; the caller decides
/// what the user sees via [`RequestError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request timed out")]
    Timeout,

    #[error("could not reach backend: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Builds a status error from a raw response body, picking up the
    /// backend's `detail` when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        RequestError::Status {
            status,
            detail: detail_from_body(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Backend detail when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Pulls the `detail` field out of an error body.
///
/// FastAPI sends either a plain string or, for request validation failures, a
/// list of `{loc, msg, type}` objects. Lists are flattened to their messages.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Client-side rejection of a submission. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in HCP Name, Date, and Time.")]
    MissingRequired,

    #[error("Please ensure Date and Time are selected.")]
    MissingDateTime,

    #[error("'{0}' is not a valid date and time.")]
    InvalidDateTime(String),
}
