//! Async fetch collaborators.
//!
//! The store itself is synchronous; async work lives outside it and talks
//! to it only through `dispatch`. Each load dispatches its start action,
//! awaits the backend, then dispatches success or failure.

use crate::store::AppStore;
use crate::types::AppAction;
use uniflow_store::StoreError;

/// Backend the fleet screens load their data from.
pub trait VehicleApi {
    /// Fetch the vehicle list.
    fn fetch_vehicles(&self) -> impl std::future::Future<Output = Result<Vec<String>, String>> + Send;

    /// Fetch the vehicle-type list.
    fn fetch_vehicle_types(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, String>> + Send;
}

/// Load vehicles into the store through the start/success/failure cycle.
///
/// # Errors
///
/// Returns an error if a dispatch is rejected by the store.
pub async fn load_vehicles(store: &AppStore, api: &impl VehicleApi) -> Result<(), StoreError> {
    store.dispatch(AppAction::StartFetchVehicles)?;
    match api.fetch_vehicles().await {
        Ok(data) => {
            tracing::info!(count = data.len(), "vehicles fetched");
            store.dispatch(AppAction::SuccessFetchVehicles(data))?;
        }
        Err(error) => {
            tracing::warn!(%error, "vehicle fetch failed");
            store.dispatch(AppAction::FailureFetchVehicles(error))?;
        }
    }
    Ok(())
}

/// Load vehicle types into the store through the start/success/failure cycle.
///
/// # Errors
///
/// Returns an error if a dispatch is rejected by the store.
pub async fn load_vehicle_types(store: &AppStore, api: &impl VehicleApi) -> Result<(), StoreError> {
    store.dispatch(AppAction::StartFetchVehicleTypes)?;
    match api.fetch_vehicle_types().await {
        Ok(data) => {
            tracing::info!(count = data.len(), "vehicle types fetched");
            store.dispatch(AppAction::SuccessFetchVehicleTypes(data))?;
        }
        Err(error) => {
            tracing::warn!(%error, "vehicle type fetch failed");
            store.dispatch(AppAction::FailureFetchVehicleTypes(error))?;
        }
    }
    Ok(())
}

/// An in-memory backend with scripted responses.
#[derive(Clone, Debug)]
pub struct CannedApi {
    /// Response for [`VehicleApi::fetch_vehicles`].
    pub vehicles: Result<Vec<String>, String>,
    /// Response for [`VehicleApi::fetch_vehicle_types`].
    pub vehicle_types: Result<Vec<String>, String>,
}

impl CannedApi {
    /// A backend that answers both fetches successfully.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            vehicles: Ok(vec![
                "Nissan Qashqai".to_string(),
                "Toyota Corolla".to_string(),
                "Honda Civic".to_string(),
            ]),
            vehicle_types: Ok(vec!["Car".to_string(), "Van".to_string()]),
        }
    }
}

impl VehicleApi for CannedApi {
    async fn fetch_vehicles(&self) -> Result<Vec<String>, String> {
        self.vehicles.clone()
    }

    async fn fetch_vehicle_types(&self) -> Result<Vec<String>, String> {
        self.vehicle_types.clone()
    }
}
