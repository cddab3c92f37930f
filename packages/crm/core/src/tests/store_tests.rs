use super::*;
use crate::store::{InteractionStore, Operation, Status, ADD_FALLBACK, FETCH_FALLBACK};
use pretty_assertions::assert_eq;

#[test]
fn test_new_store_is_idle_and_empty() {
    let store = InteractionStore::new();

    assert_eq!(store.status(), Status::Idle);
    assert_eq!(store.add_status(), Status::Idle);
    assert!(store.items().is_empty());
    assert_eq!(store.error(), None);
    assert_eq!(store.add_error(), None);
}

#[test]
fn test_fetch_success_replaces_items_wholesale() {
    let mut store = InteractionStore::new();

    let first = store.begin_fetch();
    assert_eq!(store.status(), Status::Loading);
    store.finish_fetch(first, Ok(vec![sample_interaction(1, "Dr. A"), sample_interaction(2, "Dr. B")]));

    let second = store.begin_fetch();
    store.finish_fetch(second, Ok(vec![sample_interaction(3, "Dr. C")]));

    assert_eq!(store.status(), Status::Succeeded);
    assert_eq!(store.items(), &[sample_interaction(3, "Dr. C")]);
}

#[test]
fn test_fetch_keeps_server_order() {
    let mut store = InteractionStore::new();
    let ticket = store.begin_fetch();

    store.finish_fetch(
        ticket,
        Ok(vec![sample_interaction(9, "Dr. Z"), sample_interaction(1, "Dr. A")]),
    );

    let names: Vec<&str> = store.items().iter().map(|i| i.hcp_name.as_str()).collect();
    assert_eq!(names, vec!["Dr. Z", "Dr. A"]);
}

#[test]
fn test_fetch_failure_keeps_items_and_records_detail() {
    let mut store = InteractionStore::new();
    let ticket = store.begin_fetch();
    store.finish_fetch(ticket, Ok(vec![sample_interaction(1, "Dr. A")]));

    let ticket = store.begin_fetch();
    store.finish_fetch(ticket, Err(backend_error(500, "Database error occurred")));

    assert_eq!(store.status(), Status::Failed);
    assert_eq!(store.error(), Some("Database error occurred"));
    assert_eq!(store.items().len(), 1);
}

#[test]
fn test_fetch_transport_failure_uses_fallback() {
    let mut store = InteractionStore::new();
    let ticket = store.begin_fetch();

    store.finish_fetch(ticket, Err(RequestError::Timeout));

    assert_eq!(store.error(), Some(FETCH_FALLBACK));
}

#[test]
fn test_stale_fetch_completion_is_discarded() {
    let mut store = InteractionStore::new();
    let older = store.begin_fetch();
    let newer = store.begin_fetch();

    // The newer request answers first, then the older one straggles in
    assert!(store.finish_fetch(newer, Ok(vec![sample_interaction(2, "Dr. New")])));
    assert!(!store.finish_fetch(older, Ok(vec![sample_interaction(1, "Dr. Old")])));

    assert_eq!(store.items(), &[sample_interaction(2, "Dr. New")]);
    assert_eq!(store.status(), Status::Succeeded);
}

#[test]
fn test_add_success_resets_fetch_to_idle_without_inserting() {
    let mut store = InteractionStore::new();
    let fetch = store.begin_fetch();
    store.finish_fetch(fetch, Ok(vec![sample_interaction(1, "Dr. A")]));

    let add = store.begin_add();
    assert_eq!(store.add_status(), Status::Loading);
    store.finish_add(add, Ok(created_response(2)));

    assert_eq!(store.add_status(), Status::Succeeded);
    assert_eq!(store.status(), Status::Idle);
    assert_eq!(store.items(), &[sample_interaction(1, "Dr. A")]);
}

#[test]
fn test_add_failure_leaves_fetch_untouched() {
    let mut store = InteractionStore::new();
    let fetch = store.begin_fetch();
    store.finish_fetch(fetch, Ok(vec![sample_interaction(1, "Dr. A")]));

    let add = store.begin_add();
    store.finish_add(add, Err(RequestError::Transport("connection refused".into())));

    assert_eq!(store.add_status(), Status::Failed);
    assert_eq!(store.add_error(), Some(ADD_FALLBACK));
    assert_eq!(store.status(), Status::Succeeded);
    assert_eq!(store.error(), None);
}

#[test]
fn test_reset_add_status_clears_error() {
    let mut store = InteractionStore::new();
    let add = store.begin_add();
    store.finish_add(add, Err(backend_error(422, "hcp_name required")));

    store.reset_add_status();

    assert_eq!(store.add_operation(), &Operation::Idle);
    assert_eq!(store.add_error(), None);
}

#[test]
fn test_add_completion_after_reset_is_discarded() {
    let mut store = InteractionStore::new();
    let add = store.begin_add();
    store.reset_add_status();

    assert!(!store.finish_add(add, Ok(created_response(1))));
    assert_eq!(store.add_status(), Status::Idle);
}

#[test]
fn test_fetch_and_add_tickets_never_collide() {
    let mut store = InteractionStore::new();
    let fetch = store.begin_fetch();
    let add = store.begin_add();

    assert_ne!(fetch, add);
    // An add ticket means nothing to the fetch lifecycle
    assert!(!store.finish_fetch(add, Ok(vec![])));
    assert_eq!(store.status(), Status::Loading);
}
