use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a ride/delivery order.
///
/// The backend hands out either string ids (Mongo object ids, `"ORD-42"`) or plain integers, so
/// both are kept as they came and written back out in the same JSON shape. No validation is
/// performed: an empty or malformed id is sent as-is.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum OrderId {
    Text(String),
    Numeric(u64),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Text(id) => f.write_str(id),
            OrderId::Numeric(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId::Text(id.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId::Text(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId::Numeric(id)
    }
}

// Ids coming from a path segment or a CLI argument are always text, "42" included.
impl FromStr for OrderId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OrderId::from(s))
    }
}

struct OrderIdVisitor;

impl<'de> Visitor<'de> for OrderIdVisitor {
    type Value = OrderId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an order id as a string or a non negative integer")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(OrderId::Text(s.to_owned()))
    }

    fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(OrderId::Text(s))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(OrderId::Numeric(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        u64::try_from(v)
            .map(OrderId::Numeric)
            .map_err(|_| E::custom(format!("order id can't be negative: {v}")))
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OrderIdVisitor)
    }
}
