mod location;

use model::order::OrderId;

pub use location::LocationNavigator;

pub const DRIVER_ONGOING_RIDE_PATH: &str = "/driver_ongoing_ride";

/// Moves the driver's UI to another page.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Sync + Send {
    /// Full-page navigation to `path`, an absolute path on the application origin.
    fn go_to(&self, path: &str);
}

/// Path of the view tracking an accepted order. The id is interpolated as-is, without
/// percent-encoding.
pub fn ongoing_ride_path(order_id: &OrderId) -> String {
    format!("{DRIVER_ONGOING_RIDE_PATH}/{order_id}")
}
