mod integration_tests;
mod store_tests;

use crate::types::{CreateInteractionResponse, Interaction, InteractionId, Sentiment};
use crate::{Action, AppState, Effect, FormField, RequestError, Ticket};

pub(crate) fn sample_interaction(id: i64, name: &str) -> Interaction {
    Interaction {
        id: InteractionId::Number(id),
        hcp_name: name.to_string(),
        interaction_type: Some("Meeting".to_string()),
        interaction_datetime: "2025-05-03T19:30:00".to_string(),
        attendees: None,
        topics_discussed: None,
        summary: None,
        materials_shared: None,
        hcp_sentiment: Some(Sentiment::Positive),
        outcomes: None,
        follow_up_actions: None,
        ai_suggested_follow_ups: None,
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn created_response(id: i64) -> CreateInteractionResponse {
    CreateInteractionResponse {
        message: "Interaction logged successfully".to_string(),
        interaction_id: InteractionId::Number(id),
        data: serde_json::Value::Null,
    }
}

pub(crate) fn backend_error(status: u16, detail: &str) -> RequestError {
    RequestError::Status {
        status,
        detail: Some(detail.to_string()),
    }
}

/// Applies `actions` in order through `reduce`, collecting every effect.
pub(crate) fn apply_actions(initial: &AppState, actions: Vec<Action>) -> (AppState, Vec<Effect>) {
    let mut state = initial.clone();
    let mut all_effects = Vec::new();

    for action in actions {
        let (new_state, effects) = crate::reduce(&state, &action);
        state = new_state;
        all_effects.extend(effects);
    }

    (state, all_effects)
}

pub(crate) fn edit(field: FormField, value: &str) -> Action {
    Action::EditField {
        field,
        value: value.to_string(),
    }
}

/// A state whose form passes validation.
pub(crate) fn filled_form_state() -> AppState {
    let (state, _) = apply_actions(
        &AppState::default(),
        vec![
            edit(FormField::HcpName, "Dr. Jane Doe"),
            edit(FormField::Date, "2025-05-03"),
            edit(FormField::Time, "19:30"),
        ],
    );
    state
}

pub(crate) fn fetch_ticket(effects: &[Effect]) -> Ticket {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::FetchInteractions { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("expected a FetchInteractions effect")
}

pub(crate) fn add_ticket(effects: &[Effect]) -> Ticket {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::CreateInteraction { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("expected a CreateInteraction effect")
}

pub(crate) fn notes_ticket(effects: &[Effect]) -> Ticket {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::ProcessNotes { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("expected a ProcessNotes effect")
}

pub(crate) fn dismissal(effects: &[Effect]) -> Option<(Ticket, std::time::Duration)> {
    effects.iter().find_map(|e| match e {
        Effect::ScheduleAddStatusReset { token, after } => Some((*token, *after)),
        _ => None,
    })
}

pub(crate) fn is_network(effect: &Effect) -> bool {
    !matches!(effect, Effect::ScheduleAddStatusReset { .. })
}
