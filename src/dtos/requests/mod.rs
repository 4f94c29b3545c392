mod accept_order_request;
mod receive_location_request;

pub use accept_order_request::AcceptOrderRequest;
pub use receive_location_request::ReceiveLocationRequest;
