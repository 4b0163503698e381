//! Store setup: composes the slice reducers into the application store.

use crate::reducers::{ActivityReducer, AuthReducer, VehicleReducer, VehicleTypeReducer};
use crate::types::{AppAction, AppState};
use uniflow_core::{scope, RootReducer};
use uniflow_store::Store;

/// The application's store type.
pub type AppStore = Store<RootReducer<AppState, AppAction>>;

/// Build the root reducer: one scoped entry per slice, in state order.
#[must_use]
pub fn app_reducer() -> RootReducer<AppState, AppAction> {
    RootReducer::new()
        .with(scope(
            VehicleReducer,
            |s: &AppState| &s.vehicle_state,
            |s, v| s.vehicle_state = v,
        ))
        .with(scope(
            VehicleTypeReducer,
            |s: &AppState| &s.vehicle_type_state,
            |s, v| s.vehicle_type_state = v,
        ))
        .with(scope(
            AuthReducer,
            |s: &AppState| &s.auth_state,
            |s, v| s.auth_state = v,
        ))
        .with(scope(
            ActivityReducer,
            |s: &AppState| &s.activity_state,
            |s, v| s.activity_state = v,
        ))
}

/// Create the application store, bootstrapped from every slice's initial
/// state.
///
/// Constructed once at startup and passed to collaborators by value (the
/// handle is cheap to clone) - there is no global store.
#[must_use]
pub fn create_store() -> AppStore {
    Store::new(app_reducer())
}

/// Create the application store from a previously saved snapshot.
#[must_use]
pub fn create_store_with(preloaded: AppState) -> AppStore {
    Store::with_preloaded(app_reducer(), preloaded)
}
