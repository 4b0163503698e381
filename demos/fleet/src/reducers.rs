//! Slice reducers for the fleet application.
//!
//! Each reducer owns its slice's shape and initial value, recognizes its
//! own actions, and passes everything else through unchanged. `Logout` is
//! a declared capability: the slices that match it revert to their initial
//! state, the activity slice intentionally keeps counting.

use crate::types::{ActivityState, AppAction, AuthState, FetchState};
use uniflow_core::Reducer;

/// Vehicles slice reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct VehicleReducer;

impl Reducer for VehicleReducer {
    type State = FetchState;
    type Action = AppAction;

    fn initial(&self) -> FetchState {
        FetchState::default()
    }

    fn reduce(&self, state: &FetchState, action: &AppAction) -> FetchState {
        match action {
            AppAction::Logout => self.initial(),
            AppAction::StartFetchVehicles => state.loading(),
            AppAction::SuccessFetchVehicles(data) => FetchState::succeeded(data.clone()),
            AppAction::FailureFetchVehicles(error) => state.failed(error.clone()),
            _ => state.clone(),
        }
    }
}

/// Vehicle-types slice reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct VehicleTypeReducer;

impl Reducer for VehicleTypeReducer {
    type State = FetchState;
    type Action = AppAction;

    fn initial(&self) -> FetchState {
        FetchState::default()
    }

    fn reduce(&self, state: &FetchState, action: &AppAction) -> FetchState {
        match action {
            AppAction::Logout => self.initial(),
            AppAction::StartFetchVehicleTypes => state.loading(),
            AppAction::SuccessFetchVehicleTypes(data) => FetchState::succeeded(data.clone()),
            AppAction::FailureFetchVehicleTypes(error) => state.failed(error.clone()),
            _ => state.clone(),
        }
    }
}

/// Auth slice reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AppAction;

    fn initial(&self) -> AuthState {
        AuthState { current_user: None }
    }

    fn reduce(&self, state: &AuthState, action: &AppAction) -> AuthState {
        match action {
            AppAction::Logout => self.initial(),
            AppAction::SetCurrentUser(user) => AuthState {
                current_user: Some(user.clone()),
            },
            _ => state.clone(),
        }
    }
}

/// Activity slice reducer: recognizes every action, resets on none.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActivityReducer;

impl Reducer for ActivityReducer {
    type State = ActivityState;
    type Action = AppAction;

    fn initial(&self) -> ActivityState {
        ActivityState { actions_seen: 0 }
    }

    fn reduce(&self, state: &ActivityState, _action: &AppAction) -> ActivityState {
        ActivityState {
            actions_seen: state.actions_seen + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::set_current_user;
    use uniflow_testing::ReducerTest;

    #[test]
    fn start_fetch_flags_loading_and_keeps_data() {
        ReducerTest::new(VehicleReducer)
            .given_state(FetchState::succeeded(vec!["Nissan".to_string()]))
            .when_action(AppAction::StartFetchVehicles)
            .then_state(|state| {
                assert!(state.is_loading);
                assert_eq!(state.data, vec!["Nissan".to_string()]);
            })
            .run();
    }

    #[test]
    fn success_replaces_data_and_clears_error() {
        ReducerTest::new(VehicleReducer)
            .given_state(FetchState {
                data: vec![],
                error: Some("boom".to_string()),
                is_loading: true,
            })
            .when_action(AppAction::SuccessFetchVehicles(vec![
                "Nissan".to_string(),
                "Toyota".to_string(),
            ]))
            .then_state(|state| {
                assert_eq!(state.data.len(), 2);
                assert_eq!(state.error, None);
                assert!(!state.is_loading);
            })
            .run();
    }

    #[test]
    fn failure_records_error_and_keeps_data() {
        ReducerTest::new(VehicleReducer)
            .given_state(FetchState::succeeded(vec!["Nissan".to_string()]))
            .when_action(AppAction::FailureFetchVehicles("timeout".to_string()))
            .then_state(|state| {
                assert_eq!(state.error.as_deref(), Some("timeout"));
                assert_eq!(state.data, vec!["Nissan".to_string()]);
                assert!(!state.is_loading);
            })
            .run();
    }

    #[test]
    fn vehicle_reducer_ignores_vehicle_type_actions() {
        ReducerTest::new(VehicleReducer)
            .given_state(FetchState::succeeded(vec!["Nissan".to_string()]))
            .when_action(AppAction::SuccessFetchVehicleTypes(vec![
                "Car".to_string(),
            ]))
            .then_unchanged()
            .run();
    }

    #[test]
    fn logout_resets_vehicles_to_initial() {
        ReducerTest::new(VehicleReducer)
            .given_state(FetchState::succeeded(vec!["Nissan".to_string()]))
            .when_action(AppAction::Logout)
            .then_state(|state| assert_eq!(state, &FetchState::default()))
            .run();
    }

    #[test]
    fn auth_tracks_the_current_user() {
        ReducerTest::new(AuthReducer)
            .given_initial()
            .when_action(set_current_user("ada"))
            .then_state(|state| {
                assert_eq!(
                    state.current_user.as_ref().map(|u| u.name.as_str()),
                    Some("ada")
                );
            })
            .run();
    }

    #[test]
    fn activity_never_resets() {
        ReducerTest::new(ActivityReducer)
            .given_state(ActivityState { actions_seen: 9 })
            .when_action(AppAction::Logout)
            .then_state(|state| assert_eq!(state.actions_seen, 10))
            .run();
    }
}
