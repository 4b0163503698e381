//! State and action types for the todo slice.

use chrono::{DateTime, Utc};

/// One entry in the todo list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Caller-assigned identifier, unique within the list.
    pub id: u64,
    /// What needs doing.
    pub text: String,
    /// Whether the item has been completed.
    pub is_done: bool,
    /// When the item was created, supplied by the caller at dispatch time.
    pub created_at: DateTime<Utc>,
}

/// The todo slice: newest items first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All items, most recently added at the front.
    pub list_todo: Vec<TodoItem>,
}

/// Everything that can happen to the todo list.
///
/// Ids and timestamps are payload data: the reducer stays pure and the
/// caller (UI layer, test, importer) owns identity and time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Prepend a new, not-yet-done item.
    AddItem {
        /// Identifier for the new item.
        id: u64,
        /// Item text.
        text: String,
        /// Creation timestamp.
        created_at: DateTime<Utc>,
    },
    /// Mark the item with this id as done. Unknown ids are ignored.
    SetDone {
        /// Target item id.
        id: u64,
    },
    /// Remove the item with this id. Unknown ids are ignored.
    RemoveItem {
        /// Target item id.
        id: u64,
    },
}

/// Action creator for [`TodoAction::AddItem`].
#[must_use]
pub fn add_item(id: u64, text: impl Into<String>, created_at: DateTime<Utc>) -> TodoAction {
    TodoAction::AddItem {
        id,
        text: text.into(),
        created_at,
    }
}

/// Action creator for [`TodoAction::SetDone`].
#[must_use]
pub const fn set_done(id: u64) -> TodoAction {
    TodoAction::SetDone { id }
}

/// Action creator for [`TodoAction::RemoveItem`].
#[must_use]
pub const fn remove_item(id: u64) -> TodoAction {
    TodoAction::RemoveItem { id }
}

/// Selector factory: the text of the item with this id, if present.
pub fn todo_description(id: u64) -> impl Fn(&TodoState) -> Option<String> {
    move |state: &TodoState| {
        state
            .list_todo
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.text.clone())
    }
}

/// Selector for the number of items still open.
#[must_use]
pub fn select_open_count(state: &TodoState) -> usize {
    state.list_todo.iter().filter(|item| !item.is_done).count()
}
