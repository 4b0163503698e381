//! Multi-slice example: vehicles, vehicle types, auth and activity
//! composed into a single store.
//!
//! Shows the full shape of a larger application:
//!
//! - several slice reducers over one shared action enum, composed with
//!   [`uniflow_core::RootReducer`],
//! - a shared reset capability (`Logout`) that some slices opt into and
//!   one deliberately does not,
//! - async fetch collaborators that talk to the store only through
//!   `dispatch`,
//! - snapshot persistence that rebuilds a store from serialized state.

pub mod fetch;
pub mod persistence;
pub mod reducers;
pub mod selectors;
pub mod store;
pub mod types;

pub use fetch::{load_vehicle_types, load_vehicles, CannedApi, VehicleApi};
pub use persistence::{restore, snapshot};
pub use reducers::{ActivityReducer, AuthReducer, VehicleReducer, VehicleTypeReducer};
pub use selectors::{select_current_user, select_is_loading_vehicles, select_vehicles};
pub use store::{app_reducer, create_store, create_store_with, AppStore};
pub use types::{logout, set_current_user, AppAction, AppState};
