//! Snapshot persistence: serialize the whole state tree, restore a store
//! from it later.
//!
//! Another collaborator that never reaches inside the store: it reads
//! through `state()` and restores through `create_store_with`.

use crate::store::{create_store_with, AppStore};
use crate::types::AppState;

/// Serialize the store's current state tree as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn snapshot(store: &AppStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&*store.state())
}

/// Build a fresh store preloaded from a snapshot taken earlier.
///
/// # Errors
///
/// Returns an error if the snapshot does not parse as an [`AppState`].
pub fn restore(snapshot: &str) -> serde_json::Result<AppStore> {
    let state: AppState = serde_json::from_str(snapshot)?;
    Ok(create_store_with(state))
}
