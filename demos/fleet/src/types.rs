//! State and action types for the fleet application.

use serde::{Deserialize, Serialize};

/// A signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
}

/// The lifecycle of one remote fetch: idle, loading, loaded or failed.
///
/// Both vehicle slices go through the same start → success/failure cycle,
/// so the shape is shared; each slice keeps its own reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchState {
    /// Retrieved records, empty until a fetch succeeds.
    pub data: Vec<String>,
    /// Message from the most recent failed fetch.
    pub error: Option<String>,
    /// Whether a fetch is currently in flight.
    pub is_loading: bool,
}

impl FetchState {
    /// The in-flight shape: previous data retained, error state kept.
    #[must_use]
    pub fn loading(&self) -> Self {
        Self {
            is_loading: true,
            ..self.clone()
        }
    }

    /// The shape after a successful fetch.
    #[must_use]
    pub const fn succeeded(data: Vec<String>) -> Self {
        Self {
            data,
            error: None,
            is_loading: false,
        }
    }

    /// The shape after a failed fetch: previous data retained.
    #[must_use]
    pub fn failed(&self, error: String) -> Self {
        Self {
            data: self.data.clone(),
            error: Some(error),
            is_loading: false,
        }
    }
}

/// Auth slice: who, if anyone, is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// The signed-in user, if any.
    pub current_user: Option<User>,
}

/// Activity slice: counts every dispatched action.
///
/// Deliberately does not recognize [`AppAction::Logout`], pinning the rule
/// that reset is an opt-in capability per slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityState {
    /// Number of actions this slice has seen.
    pub actions_seen: u64,
}

/// The composite application state, one field per slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Vehicles fetched from the backend.
    pub vehicle_state: FetchState,
    /// Vehicle categories fetched from the backend.
    pub vehicle_type_state: FetchState,
    /// Authentication.
    pub auth_state: AuthState,
    /// Dispatch accounting.
    pub activity_state: ActivityState,
}

/// Every action in the application, across all slices.
///
/// One action may be recognized by several slices ([`AppAction::Logout`])
/// or by none that happen to be composed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    /// A vehicle fetch started.
    StartFetchVehicles,
    /// A vehicle fetch finished with these records.
    SuccessFetchVehicles(Vec<String>),
    /// A vehicle fetch failed.
    FailureFetchVehicles(String),
    /// A vehicle-type fetch started.
    StartFetchVehicleTypes,
    /// A vehicle-type fetch finished with these records.
    SuccessFetchVehicleTypes(Vec<String>),
    /// A vehicle-type fetch failed.
    FailureFetchVehicleTypes(String),
    /// A user signed in.
    SetCurrentUser(User),
    /// The user signed out; opted-in slices revert to their initial state.
    Logout,
}

/// Action creator for [`AppAction::SetCurrentUser`].
#[must_use]
pub fn set_current_user(name: impl Into<String>) -> AppAction {
    AppAction::SetCurrentUser(User { name: name.into() })
}

/// Action creator for [`AppAction::Logout`].
#[must_use]
pub const fn logout() -> AppAction {
    AppAction::Logout
}
