use serde::{self, Deserialize};

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Origin of the driver web application, e.g. `https://rides.example.com`. Every endpoint
    /// and navigation path is relative to it.
    pub backend_url: String,

    /// Timeout applied to every request sent to the backend.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Session cookie (`name=value`) sent with every request. The backend identifies the driver
    /// through it.
    pub session_cookie: Option<String>,

    /// Logs at INFO level when set, WARN otherwise. When unset, the acceptance dispatch and
    /// success events are filtered out: a successful acceptance writes no log at all and only
    /// the failure event is kept.
    #[serde(default = "default_verbose_log_mode")]
    pub verbose_log_mode: bool,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_verbose_log_mode() -> bool {
    true
}

impl GlobalConfig {
    /// `backend_url` without trailing slashes, ready to have an absolute path appended.
    pub fn origin(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }
}
