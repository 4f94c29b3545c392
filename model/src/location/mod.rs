use serde::{Deserialize, Serialize};

/// A driver position as reported by the browser geolocation API.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DriverLocation {
    pub lat: f64,
    pub lng: f64,
}

impl DriverLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
