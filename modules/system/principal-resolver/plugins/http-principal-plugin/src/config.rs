//! Configuration for the HTTP principal resolver plugin.

use std::time::Duration;

use principal_resolver_sdk::USERS_ME_PATH;
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpPrincipalPluginConfig {
    /// Backend base URL, e.g. `http://localhost:8080`.
    pub base_url: String,

    /// Profile endpoint path appended to `base_url`.
    pub endpoint_path: String,

    /// Per-request timeout of the HTTP client. The resolver module applies its own
    /// overall bound on top.
    pub request_timeout_ms: u64,
}

impl HttpPrincipalPluginConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for HttpPrincipalPluginConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            endpoint_path: USERS_ME_PATH.to_owned(),
            request_timeout_ms: 5_000,
        }
    }
}
