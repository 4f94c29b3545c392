//! RequestError is the only error a call to the driver backend can fail with. Network faults,
//! non-success statuses and unreadable bodies all map to it; the wrapped error only carries the
//! details for the logs.

pub type Result<T> = std::result::Result<T, RequestError>;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0:#}")]
    RequestFailed(#[source] anyhow::Error),
}

impl From<anyhow::Error> for RequestError {
    fn from(e: anyhow::Error) -> Self {
        Self::RequestFailed(e)
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        Self::RequestFailed(e.into())
    }
}

impl From<reqwest_middleware::Error> for RequestError {
    fn from(e: reqwest_middleware::Error) -> Self {
        Self::RequestFailed(e.into())
    }
}
