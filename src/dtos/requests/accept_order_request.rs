use model::order::OrderId;
use serde::{Deserialize, Serialize};

/// Body of `POST /accept_order`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AcceptOrderRequest {
    pub order_id: OrderId,
}

impl AcceptOrderRequest {
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}
