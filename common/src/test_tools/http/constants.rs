pub const ACCEPT_ORDER_PATH_FOR_MOCK_REQUESTS: &str = "/accept_order";
pub const RECEIVE_LOCATION_PATH_FOR_MOCK_REQUESTS: &str = "/receive_location";
pub const ORDER_ID_FOR_MOCK_REQUESTS: &str = "ORD-42";
pub const MONGO_ORDER_ID_FOR_MOCK_REQUESTS: &str = "64b7f0c2a1e4d3b2c1f0e9d8";
pub const SESSION_COOKIE_FOR_MOCK_REQUESTS: &str = "session=driver-session-token";
