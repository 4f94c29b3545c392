mod accept_order_response;
mod http_error;
mod receive_location_response;

pub use accept_order_response::{AcceptOrderResponse, AcceptanceAcknowledgement};
pub use http_error::ErrorResponseBody;
pub use receive_location_response::ReceiveLocationResponse;
