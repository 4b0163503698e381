//! Reducer logic for the todo slice.
//!
//! Every transition builds a new list: prepend on add, per-item copy on
//! set-done, filter on remove. The incoming state is never touched.

use crate::types::{TodoAction, TodoItem, TodoState};
use uniflow_core::Reducer;

/// The todo slice reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn initial(&self) -> TodoState {
        TodoState {
            list_todo: Vec::new(),
        }
    }

    fn reduce(&self, state: &TodoState, action: &TodoAction) -> TodoState {
        match action {
            TodoAction::AddItem {
                id,
                text,
                created_at,
            } => {
                let item = TodoItem {
                    id: *id,
                    text: text.clone(),
                    is_done: false,
                    created_at: *created_at,
                };
                let mut list_todo = Vec::with_capacity(state.list_todo.len() + 1);
                list_todo.push(item);
                list_todo.extend(state.list_todo.iter().cloned());
                TodoState { list_todo }
            }
            TodoAction::SetDone { id } => TodoState {
                list_todo: state
                    .list_todo
                    .iter()
                    .map(|item| {
                        if item.id == *id {
                            TodoItem {
                                is_done: true,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
            },
            TodoAction::RemoveItem { id } => TodoState {
                list_todo: state
                    .list_todo
                    .iter()
                    .filter(|item| item.id != *id)
                    .cloned()
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{add_item, remove_item, set_done};
    use chrono::{TimeZone, Utc};
    use uniflow_testing::ReducerTest;

    fn ts() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn add_prepends_an_open_item() {
        ReducerTest::new(TodoReducer)
            .given_initial()
            .when_action(add_item(1, "Buy rice", ts()))
            .then_state(|state| {
                assert_eq!(state.list_todo.len(), 1);
                let item = &state.list_todo[0];
                assert_eq!(item.id, 1);
                assert_eq!(item.text, "Buy rice");
                assert!(!item.is_done);
            })
            .run();
    }

    #[test]
    fn newest_item_lands_at_the_front() {
        let reducer = TodoReducer;
        let state = reducer.reduce(&reducer.initial(), &add_item(1, "first", ts()));
        let state = reducer.reduce(&state, &add_item(2, "second", ts()));

        let ids: Vec<u64> = state.list_todo.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn set_done_touches_only_the_matching_item() {
        let reducer = TodoReducer;
        let state = reducer.reduce(&reducer.initial(), &add_item(1, "keep", ts()));
        let state = reducer.reduce(&state, &add_item(2, "finish", ts()));

        ReducerTest::new(TodoReducer)
            .given_state(state)
            .when_action(set_done(2))
            .then_state(|state| {
                let done = &state.list_todo[0];
                assert_eq!(done.id, 2);
                assert!(done.is_done);
                assert_eq!(done.text, "finish");

                let untouched = &state.list_todo[1];
                assert_eq!(untouched.id, 1);
                assert!(!untouched.is_done);
            })
            .run();
    }

    #[test]
    fn set_done_with_unknown_id_is_passthrough() {
        let reducer = TodoReducer;
        let state = reducer.reduce(&reducer.initial(), &add_item(1, "keep", ts()));

        ReducerTest::new(TodoReducer)
            .given_state(state)
            .when_action(set_done(99))
            .then_unchanged()
            .run();
    }

    #[test]
    fn remove_filters_by_id() {
        let reducer = TodoReducer;
        let state = reducer.reduce(&reducer.initial(), &add_item(1, "stay", ts()));
        let state = reducer.reduce(&state, &add_item(2, "go", ts()));

        ReducerTest::new(TodoReducer)
            .given_state(state)
            .when_action(remove_item(2))
            .then_state(|state| {
                assert_eq!(state.list_todo.len(), 1);
                assert_eq!(state.list_todo[0].id, 1);
            })
            .run();
    }
}
