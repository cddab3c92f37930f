use chrono::NaiveDateTime;

use crate::error::{RequestError, ValidationError};
use crate::store::Ticket;
use crate::types::{non_empty, ExtractedInteraction, NewInteraction, Sentiment};

pub const DEFAULT_INTERACTION_TYPE: &str = "Meeting";
pub const EMPTY_NOTES_ERROR: &str = "Please enter some notes to process.";
pub const AI_FALLBACK: &str = "Failed to process notes with AI.";

const SUBMIT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Free-text inputs on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    HcpName,
    InteractionType,
    Date,
    Time,
    Attendees,
    TopicsDiscussed,
    Summary,
    MaterialsShared,
    Outcomes,
    FollowUpActions,
    RawNotes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Idle,
    Processing(Ticket),
}

/// Transient state of the log-interaction form, including the AI notes pane.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub hcp_name: String,
    pub interaction_type: String,
    pub date: String,
    pub time: String,
    pub attendees: String,
    pub topics_discussed: String,
    pub summary: String,
    pub materials_shared: String,
    pub hcp_sentiment: Sentiment,
    pub outcomes: String,
    pub follow_up_actions: String,
    pub raw_notes: String,
    pub ai: AiState,
    pub ai_error: Option<String>,
    last_ticket: Ticket,
    dismiss_token: Ticket,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            hcp_name: String::new(),
            interaction_type: DEFAULT_INTERACTION_TYPE.to_string(),
            date: String::new(),
            time: String::new(),
            attendees: String::new(),
            topics_discussed: String::new(),
            summary: String::new(),
            materials_shared: String::new(),
            hcp_sentiment: Sentiment::Unknown,
            outcomes: String::new(),
            follow_up_actions: String::new(),
            raw_notes: String::new(),
            ai: AiState::Idle,
            ai_error: None,
            last_ticket: Ticket::default(),
            dismiss_token: Ticket::default(),
        }
    }
}

impl EntryForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::HcpName => &self.hcp_name,
            FormField::InteractionType => &self.interaction_type,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Attendees => &self.attendees,
            FormField::TopicsDiscussed => &self.topics_discussed,
            FormField::Summary => &self.summary,
            FormField::MaterialsShared => &self.materials_shared,
            FormField::Outcomes => &self.outcomes,
            FormField::FollowUpActions => &self.follow_up_actions,
            FormField::RawNotes => &self.raw_notes,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::HcpName => &mut self.hcp_name,
            FormField::InteractionType => &mut self.interaction_type,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Attendees => &mut self.attendees,
            FormField::TopicsDiscussed => &mut self.topics_discussed,
            FormField::Summary => &mut self.summary,
            FormField::MaterialsShared => &mut self.materials_shared,
            FormField::Outcomes => &mut self.outcomes,
            FormField::FollowUpActions => &mut self.follow_up_actions,
            FormField::RawNotes => &mut self.raw_notes,
        };
        *slot = value;
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.ai, AiState::Processing(_))
    }

    /// Validates the required fields and builds the create payload.
    pub fn submission(&self) -> Result<NewInteraction, ValidationError> {
        if self.hcp_name.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if self.date.is_empty() || self.time.is_empty() {
            return Err(ValidationError::MissingDateTime);
        }

        let interaction_datetime = format!("{}T{}:00", self.date, self.time);
        // chrono tolerates unpadded fields; only the canonical shape goes out
        let canonical = NaiveDateTime::parse_from_str(&interaction_datetime, SUBMIT_DATETIME_FORMAT)
            .ok()
            .map(|parsed| parsed.format(SUBMIT_DATETIME_FORMAT).to_string());
        if canonical.as_deref() != Some(interaction_datetime.as_str()) {
            return Err(ValidationError::InvalidDateTime(interaction_datetime));
        }

        Ok(NewInteraction {
            hcp_name: self.hcp_name.clone(),
            interaction_type: self.interaction_type.clone(),
            interaction_datetime,
            attendees: optional(&self.attendees),
            topics_discussed: optional(&self.topics_discussed),
            summary: optional(&self.summary),
            materials_shared: optional(&self.materials_shared),
            hcp_sentiment: self.hcp_sentiment,
            outcomes: optional(&self.outcomes),
            follow_up_actions: optional(&self.follow_up_actions),
        })
    }

    /// Starts AI processing of the raw notes, or records why it can't.
    pub fn begin_processing(&mut self) -> Option<Ticket> {
        if self.raw_notes.trim().is_empty() {
            self.ai_error = Some(EMPTY_NOTES_ERROR.to_string());
            return None;
        }
        self.last_ticket = self.last_ticket.next();
        self.ai = AiState::Processing(self.last_ticket);
        self.ai_error = None;
        Some(self.last_ticket)
    }

    /// Applies an extraction result. Returns `false` if `ticket` is stale.
    pub fn finish_processing(
        &mut self,
        ticket: Ticket,
        result: Result<ExtractedInteraction, RequestError>,
    ) -> bool {
        if self.ai != AiState::Processing(ticket) {
            return false;
        }
        self.ai = AiState::Idle;
        match result {
            Ok(extracted) => self.apply_extraction(&extracted),
            Err(err) => self.ai_error = Some(err.user_message(AI_FALLBACK)),
        }
        true
    }

    /// Overwrites only the fields the extraction actually filled in.
    pub fn apply_extraction(&mut self, extracted: &ExtractedInteraction) {
        if let Some(name) = non_empty(&extracted.hcp_name) {
            self.hcp_name = name.to_string();
        }
        if let Some(kind) = non_empty(&extracted.interaction_type) {
            self.interaction_type = kind.to_string();
        }
        if let Some(summary) = non_empty(&extracted.summary) {
            self.summary = summary.to_string();
        }
        if let Some(sentiment) = extracted.hcp_sentiment {
            self.hcp_sentiment = sentiment;
        }
    }

    /// Resets every input, the notes, and the AI error. In-flight AI work and
    /// the dismissal timer are left alone.
    pub fn clear(&mut self) {
        *self = EntryForm {
            ai: self.ai,
            last_ticket: self.last_ticket,
            dismiss_token: self.dismiss_token,
            ..EntryForm::default()
        };
    }

    /// Drops everything the form owns, including pending AI work and the
    /// dismissal timer.
    pub fn tear_down(&mut self) {
        self.clear();
        self.ai = AiState::Idle;
        self.invalidate_dismissal();
    }

    pub fn dismiss_token(&self) -> Ticket {
        self.dismiss_token
    }

    /// Supersedes any scheduled add-status reset and returns the new token.
    pub fn invalidate_dismissal(&mut self) -> Ticket {
        self.dismiss_token = self.dismiss_token.next();
        self.dismiss_token
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
