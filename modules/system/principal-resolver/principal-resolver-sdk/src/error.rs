//! Error types for the principal resolver module.

use thiserror::Error;

/// Errors that can occur when resolving a principal.
///
/// Every variant means "no principal" to the gates; the split only drives logging
/// and whether the credential should be dropped.
#[derive(Debug, Error)]
pub enum PrincipalResolverError {
    /// The backend rejected the credential (non-200 auth response).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The backend did not answer within the configured timeout.
    #[error("timed out after {0} ms")]
    Timeout(u64),

    /// The backend could not be reached or answered with a server error.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The backend answered 200 with a body that is not a valid profile.
    #[error("malformed profile payload: {0}")]
    MalformedPayload(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PrincipalResolverError {
    /// Whether the credential itself was rejected, as opposed to the lookup failing.
    #[must_use]
    pub fn is_credential_rejected(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}
