//! Driver-side acceptance of a ride order.
//!
//! Accepting an order is fire-and-forget from the caller's point of view: the request is sent
//! in the background and, once the backend confirms, the UI is moved to the ongoing ride view.
//! A failed acceptance is only logged; the driver stays on the current page.

use crate::driver_api::DriverApi;
use crate::dtos::requests::AcceptOrderRequest;
use crate::dtos::responses::AcceptOrderResponse;
use crate::navigation::{ongoing_ride_path, Navigator};
use crate::result::error::Result;
use model::order::OrderId;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// How a background acceptance ended. While its task is running the acceptance is pending.
#[derive(Debug, Clone, PartialEq)]
pub enum AcceptanceOutcome {
    /// The backend confirmed and the UI was sent to `location`.
    Succeeded {
        response: AcceptOrderResponse,
        location: String,
    },
    /// The request failed. The error was logged and nothing else happened.
    Failed,
}

pub struct OrderAcceptanceClient<A: DriverApi, N: Navigator> {
    driver_api: Arc<A>,
    navigator: Arc<N>,
}

impl<A: DriverApi, N: Navigator> Clone for OrderAcceptanceClient<A, N> {
    fn clone(&self) -> Self {
        Self {
            driver_api: self.driver_api.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<A: DriverApi, N: Navigator> OrderAcceptanceClient<A, N> {
    pub fn new(driver_api: Arc<A>, navigator: Arc<N>) -> Self {
        Self {
            driver_api,
            navigator,
        }
    }

    /// Accepts `order_id` and, when the backend confirms, navigates to its ongoing ride view.
    ///
    /// Both outcomes are logged here. Every failure cause (network, status, body) is a
    /// [`RequestFailed`](crate::result::error::RequestError::RequestFailed), and no navigation
    /// happens on failure.
    pub async fn accept(&self, order_id: &OrderId) -> Result<AcceptOrderResponse> {
        tracing::info!(order_id = %order_id, "Accepting order: {order_id}");

        let request = AcceptOrderRequest::new(order_id.clone());
        match self.driver_api.accept_order(&request).await {
            Ok(response) => {
                tracing::info!(order_id = %order_id, response = ?response, "Order accepted");
                self.navigator.go_to(&ongoing_ride_path(order_id));
                Ok(response)
            }
            Err(e) => {
                tracing::error!(order_id = %order_id, error = ?e, "Order acceptance failed: {e}");
                Err(e)
            }
        }
    }
}

impl<A, N> OrderAcceptanceClient<A, N>
where
    A: DriverApi + 'static,
    N: Navigator + 'static,
{
    /// Starts accepting `order_id` on the runtime and returns right away.
    ///
    /// The returned handle can be dropped: the request still runs to completion. Nothing is
    /// deduplicated, so accepting the same order twice sends two requests.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn accept_order(&self, order_id: OrderId) -> JoinHandle<AcceptanceOutcome> {
        let client = self.clone();

        tokio::spawn(async move {
            match client.accept(&order_id).await {
                Ok(response) => AcceptanceOutcome::Succeeded {
                    response,
                    location: ongoing_ride_path(&order_id),
                },
                Err(_) => AcceptanceOutcome::Failed,
            }
        })
    }
}
