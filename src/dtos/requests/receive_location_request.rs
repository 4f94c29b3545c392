use model::location::DriverLocation;
use serde::{Deserialize, Serialize};

/// Body of `POST /receive_location`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReceiveLocationRequest {
    pub location: DriverLocation,
}

impl From<DriverLocation> for ReceiveLocationRequest {
    fn from(location: DriverLocation) -> Self {
        Self { location }
    }
}
