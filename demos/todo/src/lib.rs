//! # Todo Example
//!
//! A todo list slice driven through the store.
//!
//! This example showcases:
//! - Struct-payload actions (id, text and timestamp ride in the payload)
//! - List transitions that copy instead of mutating
//! - A selector factory (`todo_description`) with `Option` for misses
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use todo_demo::{add_item, set_done, todo_description, TodoReducer};
//! use uniflow_store::Store;
//!
//! # fn main() -> Result<(), uniflow_store::StoreError> {
//! let store = Store::new(TodoReducer);
//! store.dispatch(add_item(1, "Buy rice", Utc::now()))?;
//! store.dispatch(set_done(1))?;
//!
//! assert_eq!(store.select(todo_description(1)).as_deref(), Some("Buy rice"));
//! assert_eq!(store.select(todo_description(2)), None);
//! # Ok(())
//! # }
//! ```

/// The todo slice reducer.
pub mod reducer;

/// State, actions, creators and selectors.
pub mod types;

pub use reducer::TodoReducer;
pub use types::{
    add_item, remove_item, select_open_count, set_done, todo_description, TodoAction, TodoItem,
    TodoState,
};
