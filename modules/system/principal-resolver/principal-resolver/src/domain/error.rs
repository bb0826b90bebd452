//! Domain errors for the principal resolver.

use principal_resolver_sdk::PrincipalResolverError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("plugin '{plugin}' timed out after {timeout_ms} ms")]
    Timeout { plugin: &'static str, timeout_ms: u64 },

    #[error("plugin '{plugin}' rejected the credential: {reason}")]
    Rejected { plugin: &'static str, reason: String },

    #[error("plugin '{plugin}' is unavailable: {reason}")]
    PluginUnavailable { plugin: &'static str, reason: String },

    #[error("plugin '{plugin}' returned an invalid profile: {reason}")]
    InvalidProfile { plugin: &'static str, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub(crate) fn from_plugin(plugin: &'static str, e: PrincipalResolverError) -> Self {
        match e {
            PrincipalResolverError::Unauthorized(reason) => Self::Rejected { plugin, reason },
            PrincipalResolverError::Timeout(timeout_ms) => Self::Timeout { plugin, timeout_ms },
            PrincipalResolverError::ServiceUnavailable(reason) => {
                Self::PluginUnavailable { plugin, reason }
            }
            PrincipalResolverError::MalformedPayload(reason) => {
                Self::InvalidProfile { plugin, reason }
            }
            PrincipalResolverError::Internal(reason) => Self::Internal(reason),
        }
    }
}

impl From<DomainError> for PrincipalResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Timeout { timeout_ms, .. } => Self::Timeout(timeout_ms),
            DomainError::Rejected { reason, .. } => Self::Unauthorized(reason),
            DomainError::PluginUnavailable { plugin, reason } => {
                Self::ServiceUnavailable(format!("plugin '{plugin}': {reason}"))
            }
            DomainError::InvalidProfile { reason, .. } => Self::MalformedPayload(reason),
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
