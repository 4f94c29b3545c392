mod http_driver_api;

use crate::dtos::requests::{AcceptOrderRequest, ReceiveLocationRequest};
use crate::dtos::responses::{AcceptOrderResponse, ReceiveLocationResponse};
use crate::result::error::Result;
use async_trait::async_trait;

pub use http_driver_api::HttpDriverApi;

pub const ACCEPT_ORDER_PATH: &str = "/accept_order";
pub const RECEIVE_LOCATION_PATH: &str = "/receive_location";

/// Calls the driver endpoints of the ride backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverApi: Sync + Send {
    /// Tells the backend the current driver takes the order.
    async fn accept_order(&self, request: &AcceptOrderRequest) -> Result<AcceptOrderResponse>;

    /// Stores the driver's current position in their session.
    async fn report_location(
        &self,
        request: &ReceiveLocationRequest,
    ) -> Result<ReceiveLocationResponse>;
}
