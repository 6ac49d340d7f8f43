use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Backend transport configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Backend origin. Endpoint paths are appended to whatever path it carries.
    /// TOML: `client.base_url`. Default: `http://127.0.0.1:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Whole-request timeout in seconds (connect, send and body read).
    /// TOML: `client.timeout_secs`. Default: unset, requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default backend URL")
}
