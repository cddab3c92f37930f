use super::*;
use crate::list::{list_content, ListContent};
use crate::store::Status;
use crate::{dispatch, reduce};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn test_mount_fetches_once_and_renders_card() {
    let state = AppState::default();

    let (state, effects) = dispatch(&state, &Action::ListMounted);

    // Exactly one list request goes out
    let fetches: Vec<&Effect> = effects
        .iter()
        .filter(|e| matches!(e, Effect::FetchInteractions { .. }))
        .collect();
    assert_eq!(fetches.len(), 1);
    assert_eq!(list_content(&state), ListContent::Loading);

    let records: Vec<Interaction> =
        serde_json::from_str(r#"[{"id": 1, "hcp_name": "Dr. A", "interaction_datetime": "2025-05-03T19:30:00", "hcp_sentiment": "Positive"}]"#)
            .unwrap();
    let (state, effects) = dispatch(
        &state,
        &Action::InteractionsFetched {
            ticket: fetch_ticket(&effects),
            result: Ok(records),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.store.status(), Status::Succeeded);
    match list_content(&state) {
        ListContent::Cards(cards) => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].hcp_name, "Dr. A");
        }
        other => panic!("Expected one card, got {:?}", other),
    }
}

#[test]
fn test_remount_does_not_refetch_settled_list() {
    let (state, effects) = dispatch(&AppState::default(), &Action::ListMounted);
    let (state, _) = dispatch(
        &state,
        &Action::InteractionsFetched {
            ticket: fetch_ticket(&effects),
            result: Ok(vec![]),
        },
    );

    let (_, effects) = dispatch(&state, &Action::ListMounted);

    assert!(effects.is_empty());
}

#[test]
fn test_successful_add_clears_form_and_triggers_refetch() {
    let (state, effects) = dispatch(&filled_form_state(), &Action::ListMounted);
    let (state, _) = dispatch(
        &state,
        &Action::InteractionsFetched {
            ticket: fetch_ticket(&effects),
            result: Ok(vec![sample_interaction(1, "Dr. A")]),
        },
    );
    let (state, _) = apply_actions(
        &state,
        vec![
            edit(FormField::Summary, "Discussed dosing"),
            edit(FormField::RawNotes, "raw"),
        ],
    );

    let (state, effects) = dispatch(&state, &Action::SubmitForm);
    let ticket = add_ticket(&effects);

    // The store alone drops back to idle; the list reacts on its next pass
    let completion = Action::InteractionAdded {
        ticket,
        result: Ok(created_response(2)),
    };
    let (reduced, _) = reduce(&state, &completion);
    assert_eq!(reduced.store.add_status(), Status::Succeeded);
    assert_eq!(reduced.store.status(), Status::Idle);
    assert_eq!(reduced.form.hcp_name, "");
    assert_eq!(reduced.form.date, "");
    assert_eq!(reduced.form.time, "");
    assert_eq!(reduced.form.summary, "");
    assert_eq!(reduced.form.raw_notes, "");
    assert_eq!(reduced.form.interaction_type, "Meeting");
    assert_eq!(reduced.form.ai_error, None);
    // No local insert happens
    assert_eq!(reduced.store.items().len(), 1);

    let (settled, effects) = dispatch(&state, &completion);
    assert_eq!(settled.store.status(), Status::Loading);
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::FetchInteractions { .. })));
    assert_eq!(
        dismissal(&effects).map(|(_, after)| after),
        Some(Duration::from_secs(3))
    );
}

#[test]
fn test_rejected_add_keeps_form_and_clears_after_window() {
    let (state, _) = apply_actions(
        &filled_form_state(),
        vec![edit(FormField::Outcomes, "Agreed to trial")],
    );
    let before = state.form.clone();

    let (state, effects) = dispatch(&state, &Action::SubmitForm);
    let error = RequestError::from_response(422, r#"{"detail": "hcp_name required"}"#);
    assert_eq!(error.status(), Some(422));

    let (state, effects) = dispatch(
        &state,
        &Action::InteractionAdded {
            ticket: add_ticket(&effects),
            result: Err(error),
        },
    );

    assert_eq!(state.store.add_status(), Status::Failed);
    assert_eq!(state.store.add_error(), Some("hcp_name required"));
    assert_eq!(state.form.hcp_name, before.hcp_name);
    assert_eq!(state.form.date, before.date);
    assert_eq!(state.form.time, before.time);
    assert_eq!(state.form.outcomes, before.outcomes);

    let (token, after) = dismissal(&effects).expect("failure should be dismissed later");
    assert_eq!(after, Duration::from_secs(5));

    let (state, _) = dispatch(&state, &Action::AddStatusElapsed { token });
    assert_eq!(state.store.add_status(), Status::Idle);
    assert_eq!(state.store.add_error(), None);
}

#[test]
fn test_add_failure_does_not_touch_fetched_list() {
    let (state, effects) = dispatch(&filled_form_state(), &Action::ListMounted);
    let (state, _) = dispatch(
        &state,
        &Action::InteractionsFetched {
            ticket: fetch_ticket(&effects),
            result: Ok(vec![sample_interaction(1, "Dr. A")]),
        },
    );

    let (state, effects) = dispatch(&state, &Action::SubmitForm);
    let (state, effects) = dispatch(
        &state,
        &Action::InteractionAdded {
            ticket: add_ticket(&effects),
            result: Err(RequestError::Timeout),
        },
    );

    assert!(!effects.iter().any(is_network));
    assert_eq!(state.store.status(), Status::Succeeded);
    assert_eq!(state.store.items(), &[sample_interaction(1, "Dr. A")]);
    assert_eq!(state.store.add_error(), Some("Failed to add interaction"));
}

#[test]
fn test_invalid_submission_never_reaches_network() {
    let (state, _) = dispatch(&AppState::default(), &Action::ListMounted);

    for field in [FormField::HcpName, FormField::Date, FormField::Time] {
        let (broken, _) = apply_actions(&filled_form_state(), vec![edit(field, "")]);
        let broken = AppState {
            list: state.list.clone(),
            store: state.store.clone(),
            ..broken
        };

        let (_, effects) = dispatch(&broken, &Action::SubmitForm);

        assert!(
            !effects.iter().any(is_network),
            "{:?} left empty still produced {:?}",
            field,
            effects
        );
    }
}

#[test]
fn test_ai_prefill_then_submit() {
    let (state, _) = apply_actions(
        &AppState::default(),
        vec![
            edit(FormField::RawNotes, "Met Dr Evans today, she was upbeat."),
            Action::ProcessNotes,
        ],
    );
    let (state, effects) = reduce(&state, &Action::ProcessNotes);
    assert!(effects.is_empty(), "second press while processing is ignored");

    let ticket = match state.form.ai {
        crate::form::AiState::Processing(ticket) => ticket,
        crate::form::AiState::Idle => panic!("form should be processing"),
    };
    let (state, _) = apply_actions(
        &state,
        vec![
            Action::NotesProcessed {
                ticket,
                result: Ok(serde_json::from_str(
                    r#"{"hcp_name": "Dr. Evans", "interaction_type": "Meeting", "summary": "Upbeat about results.", "hcp_sentiment": "Positive"}"#,
                )
                .unwrap()),
            },
            edit(FormField::Date, "2025-06-01"),
            edit(FormField::Time, "09:15"),
        ],
    );

    let (_, effects) = dispatch(&state, &Action::SubmitForm);

    match &effects[..] {
        [Effect::CreateInteraction { payload, .. }] => {
            assert_eq!(payload.hcp_name, "Dr. Evans");
            assert_eq!(payload.summary.as_deref(), Some("Upbeat about results."));
            assert_eq!(payload.hcp_sentiment, Sentiment::Positive);
            assert_eq!(payload.interaction_datetime, "2025-06-01T09:15:00");
        }
        other => panic!("Expected a single CreateInteraction, got {:?}", other),
    }
}
