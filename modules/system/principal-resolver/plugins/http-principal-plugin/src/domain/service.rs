//! Service implementation for the HTTP principal resolver plugin.

use principal_resolver_sdk::{PrincipalResolverError, UserProfile};
use reqwest::{StatusCode, Url};
use ridegate_security::{Credential, Principal};

use crate::config::HttpPrincipalPluginConfig;

/// Failure to build the plugin from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid profile endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// HTTP principal resolver service.
pub struct Service {
    client: reqwest::Client,
    endpoint: Url,
    request_timeout_ms: u64,
}

impl Service {
    /// Build the service from plugin configuration.
    ///
    /// # Errors
    /// Returns [`BuildError`] if the endpoint URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn from_config(cfg: &HttpPrincipalPluginConfig) -> Result<Self, BuildError> {
        let url = format!("{}{}", cfg.base_url.trim_end_matches('/'), cfg.endpoint_path);
        let endpoint = Url::parse(&url).map_err(|e| BuildError::InvalidUrl {
            reason: e.to_string(),
            url,
        })?;

        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(BuildError::Client)?;

        tracing::info!(endpoint = %endpoint, "HTTP principal plugin configured");
        Ok(Self {
            client,
            endpoint,
            request_timeout_ms: cfg.request_timeout_ms,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and validate the profile for `credential`.
    ///
    /// # Errors
    /// - `Timeout` / `ServiceUnavailable` for transport failures
    /// - `Unauthorized` for any non-200 status below 500
    /// - `ServiceUnavailable` for 5xx
    /// - `MalformedPayload` if the 200 body is not a valid profile
    pub async fn fetch_principal(
        &self,
        credential: &Credential,
    ) -> Result<Principal, PrincipalResolverError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(if status.is_server_error() {
                PrincipalResolverError::ServiceUnavailable(format!("backend answered {status}"))
            } else {
                PrincipalResolverError::Unauthorized(format!("backend answered {status}"))
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        let profile: UserProfile = serde_json::from_slice(&body)
            .map_err(|e| PrincipalResolverError::MalformedPayload(e.to_string()))?;

        Principal::try_from(profile)
    }

    fn transport_error(&self, e: &reqwest::Error) -> PrincipalResolverError {
        if e.is_timeout() {
            PrincipalResolverError::Timeout(self.request_timeout_ms)
        } else {
            PrincipalResolverError::ServiceUnavailable(e.to_string())
        }
    }
}
