//! Read-side queries over [`AppState`].
//!
//! Callers go through these instead of reaching into the state shape, so
//! the shape can move without touching every read site.

use crate::types::AppState;

/// Whether a vehicle fetch is currently in flight.
#[must_use]
pub fn select_is_loading_vehicles(state: &AppState) -> bool {
    state.vehicle_state.is_loading
}

/// The fetched vehicles, empty until a fetch succeeds.
#[must_use]
pub fn select_vehicles(state: &AppState) -> Vec<String> {
    state.vehicle_state.data.clone()
}

/// The signed-in user's name, if anyone is signed in.
#[must_use]
pub fn select_current_user(state: &AppState) -> Option<String> {
    state.auth_state.current_user.as_ref().map(|u| u.name.clone())
}
