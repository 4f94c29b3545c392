use serde::Deserialize;

/// Error body some backend routes send along a non-success status. Only used to make the logged
/// error easier to read.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorResponseBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorResponseBody {
    /// Parses `body`, returning `None` when it is not a JSON object or carries none of the
    /// known fields.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|parsed| {
                parsed.code.is_some() || parsed.message.is_some() || parsed.error.is_some()
            })
    }
}
