use crate::driver_api::DriverApi;
use crate::dtos::requests::ReceiveLocationRequest;
use crate::dtos::responses::ReceiveLocationResponse;
use crate::result::error::Result;
use model::location::DriverLocation;
use std::sync::Arc;

/// Sends the driver's position to the backend, which centers the pending orders map on it.
pub struct DriverLocationReporter<A: DriverApi> {
    driver_api: Arc<A>,
}

impl<A: DriverApi> DriverLocationReporter<A> {
    pub fn new(driver_api: Arc<A>) -> Self {
        Self { driver_api }
    }

    pub async fn report(&self, location: DriverLocation) -> Result<ReceiveLocationResponse> {
        tracing::info!(lat = location.lat, lng = location.lng, "Sending driver location");

        let response = self
            .driver_api
            .report_location(&ReceiveLocationRequest::from(location))
            .await
            .map_err(|e| {
                tracing::warn!(error = ?e, "Driver location was not stored: {e}");
                e
            })?;

        tracing::info!(result = %response.result, "Driver location stored");
        Ok(response)
    }
}
