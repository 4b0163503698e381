//! End-to-end tests for the todo slice with the store.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use todo_demo::{
    add_item, remove_item, select_open_count, set_done, todo_description, TodoReducer,
};
use uniflow_store::Store;
use uniflow_testing::SequentialIds;

fn ts() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap()
}

#[test]
fn add_set_done_remove_round_trip() {
    let store = Store::new(TodoReducer);
    let ids = SequentialIds::new();

    assert!(store.state().list_todo.is_empty());

    // Add.
    let id = ids.next();
    store.dispatch(add_item(id, "Buy rice", ts())).unwrap();
    {
        let state = store.state();
        assert_eq!(state.list_todo.len(), 1);
        let item = &state.list_todo[0];
        assert_eq!(item.id, id);
        assert_eq!(item.text, "Buy rice");
        assert!(!item.is_done);
    }

    // Set done: only `is_done` flips.
    store.dispatch(set_done(id)).unwrap();
    {
        let state = store.state();
        let item = &state.list_todo[0];
        assert!(item.is_done);
        assert_eq!(item.id, id);
        assert_eq!(item.text, "Buy rice");
        assert_eq!(item.created_at, ts());
    }

    // Remove: back to empty.
    store.dispatch(remove_item(id)).unwrap();
    assert!(store.state().list_todo.is_empty());
}

#[test]
fn selector_miss_is_none() {
    let store = Store::new(TodoReducer);
    assert_eq!(store.select(todo_description(1)), None);

    store.dispatch(add_item(1, "Buy rice", ts())).unwrap();
    assert_eq!(
        store.select(todo_description(1)).as_deref(),
        Some("Buy rice")
    );
    // Removed items stop resolving.
    store.dispatch(remove_item(1)).unwrap();
    assert_eq!(store.select(todo_description(1)), None);
}

#[test]
fn open_count_tracks_done_state() {
    let store = Store::new(TodoReducer);
    let ids = SequentialIds::new();

    let first = ids.next();
    let second = ids.next();
    store.dispatch(add_item(first, "one", ts())).unwrap();
    store.dispatch(add_item(second, "two", ts())).unwrap();
    assert_eq!(store.select(select_open_count), 2);

    store.dispatch(set_done(first)).unwrap();
    assert_eq!(store.select(select_open_count), 1);
}
