use serde::{Deserialize, Serialize};

/// Body returned by `POST /receive_location`, `{"result": "success"}` when the position was stored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReceiveLocationResponse {
    pub result: String,
}
