use crate::error::RequestError;
use crate::format::format_datetime;
use crate::state::AppState;
use crate::store::{Operation, Status, Ticket};
use crate::types::{non_empty, Interaction, InteractionId};

pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_LIST_MESSAGE: &str = "No interactions logged yet.";
pub const DETAIL_FALLBACK: &str = "Failed to load interaction";

/// Mount state and selection of the interaction list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    pub mounted: bool,
    pub selected: Option<InteractionId>,
    pub detail: Option<Interaction>,
    pub detail_op: Operation,
    last_ticket: Ticket,
}

impl ListView {
    /// Opens the detail panel for `id` and starts loading the full record.
    pub fn begin_detail(&mut self, id: InteractionId) -> Ticket {
        self.last_ticket = self.last_ticket.next();
        self.selected = Some(id);
        self.detail = None;
        self.detail_op = Operation::Pending(self.last_ticket);
        self.last_ticket
    }

    /// Returns `false` if `ticket` is stale or the panel was closed.
    pub fn finish_detail(
        &mut self,
        ticket: Ticket,
        result: Result<Interaction, RequestError>,
    ) -> bool {
        if !self.detail_op.is_current(ticket) {
            return false;
        }
        match result {
            Ok(record) => {
                self.detail = Some(record);
                self.detail_op = Operation::Succeeded;
            }
            Err(err) => {
                self.detail_op = Operation::Failed(err.user_message(DETAIL_FALLBACK));
            }
        }
        true
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.detail = None;
        self.detail_op = Operation::Idle;
    }
}

/// One summary card in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionCard {
    pub id: InteractionId,
    pub hcp_name: String,
    pub interaction_type: String,
    pub when: String,
    pub topics: Option<String>,
    pub attendees: Option<String>,
    pub outcomes: Option<String>,
    pub sentiment: String,
}

impl From<&Interaction> for InteractionCard {
    fn from(record: &Interaction) -> Self {
        Self {
            id: record.id.clone(),
            hcp_name: or_not_available(Some(record.hcp_name.as_str()).filter(|s| !s.is_empty())),
            interaction_type: or_not_available(non_empty(&record.interaction_type)),
            when: format_datetime(&record.interaction_datetime),
            topics: non_empty(&record.topics_discussed).map(str::to_string),
            attendees: non_empty(&record.attendees).map(str::to_string),
            outcomes: non_empty(&record.outcomes).map(str::to_string),
            sentiment: sentiment_label(record),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn sentiment_label(record: &Interaction) -> String {
    or_not_available(record.hcp_sentiment.as_ref().map(|s| s.label()))
}

/// What the list area shows. A pure function of the fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Idle,
    Loading,
    Empty,
    Cards(Vec<InteractionCard>),
    Error(String),
}

pub fn list_content(state: &AppState) -> ListContent {
    let store = &state.store;
    match store.status() {
        Status::Idle => ListContent::Idle,
        Status::Loading => ListContent::Loading,
        Status::Succeeded if store.items().is_empty() => ListContent::Empty,
        Status::Succeeded => {
            ListContent::Cards(store.items().iter().map(InteractionCard::from).collect())
        }
        Status::Failed => ListContent::Error(format!(
            "Error fetching interactions: {}",
            store.error().unwrap_or("Unknown error")
        )),
    }
}

/// Label/value rows for the detail panel. Missing values are skipped.
pub fn detail_rows(record: &Interaction) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("HCP Name", record.hcp_name.clone()),
        ("Type", or_not_available(non_empty(&record.interaction_type))),
        ("Date & Time", format_datetime(&record.interaction_datetime)),
        ("Sentiment", sentiment_label(record)),
    ];

    let optional = [
        ("Attendees", &record.attendees),
        ("Topics", &record.topics_discussed),
        ("Summary", &record.summary),
        ("Materials Shared", &record.materials_shared),
        ("Outcomes", &record.outcomes),
        ("Follow-up Actions", &record.follow_up_actions),
        ("AI Suggested Follow-ups", &record.ai_suggested_follow_ups),
    ];
    for (label, value) in optional {
        if let Some(value) = non_empty(value) {
            rows.push((label, value.to_string()));
        }
    }

    if let Some(created) = non_empty(&record.created_at) {
        rows.push(("Logged", format_datetime(created)));
    }
    if let Some(updated) = non_empty(&record.updated_at) {
        rows.push(("Updated", format_datetime(updated)));
    }
    rows
}
