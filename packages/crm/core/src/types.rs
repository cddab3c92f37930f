use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned record identity. The backend hands out integers today but
/// the client never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionId::Number(n) => write!(f, "{}", n),
            InteractionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for InteractionId {
    fn from(value: i64) -> Self {
        InteractionId::Number(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    #[default]
    Unknown,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A logged interaction as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub hcp_name: String,
    #[serde(default)]
    pub interaction_type: Option<String>,
    /// Kept verbatim; the list view decides whether it parses.
    #[serde(default)]
    pub interaction_datetime: String,
    #[serde(default)]
    pub attendees: Option<String>,
    #[serde(default)]
    pub topics_discussed: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub materials_shared: Option<String>,
    #[serde(default)]
    pub hcp_sentiment: Option<Sentiment>,
    #[serde(default)]
    pub outcomes: Option<String>,
    #[serde(default)]
    pub follow_up_actions: Option<String>,
    #[serde(default)]
    pub ai_suggested_follow_ups: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /interactions/`.
///
/// Absent optionals are left out of the JSON entirely, never sent as `null`
/// or `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInteraction {
    pub hcp_name: String,
    pub interaction_type: String,
    pub interaction_datetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics_discussed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials_shared: Option<String>,
    pub hcp_sentiment: Sentiment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_actions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInteractionResponse {
    #[serde(default)]
    pub message: String,
    pub interaction_id: InteractionId,
    /// Echo of the submitted record; only logged, so left untyped.
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    pub text: String,
}

/// Partial field values pulled out of raw notes by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedInteraction {
    #[serde(default)]
    pub hcp_name: Option<String>,
    #[serde(default)]
    pub interaction_type: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub hcp_sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: String,
}

/// Treats an empty string the same as a missing value.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
