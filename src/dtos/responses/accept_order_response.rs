use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by `POST /accept_order`.
///
/// The backend does not commit to a schema. Objects are read into [`AcceptanceAcknowledgement`]
/// so the fields we know about are typed; any other JSON value is kept untouched.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AcceptOrderResponse {
    Acknowledged(AcceptanceAcknowledgement),
    Opaque(Value),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AcceptanceAcknowledgement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
