//! Public API trait for the principal resolver.
//!
//! This trait defines the interface the access gateway uses to turn a session
//! credential into a [`Principal`]. The resolver implements it and delegates to
//! the configured plugin.

use async_trait::async_trait;
use ridegate_security::{Credential, Principal};

use crate::error::PrincipalResolverError;

/// Public API trait for the principal resolver.
///
/// ```ignore
/// let principal = resolver.resolve(&credential).await?;
/// ```
///
/// Implementations must bound the call in time and must not cache principals
/// across calls: every navigation resolves afresh.
#[async_trait]
pub trait PrincipalResolverClient: Send + Sync {
    /// Resolve the principal behind a session credential.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the backend rejects the credential
    /// - `Timeout` if the backend does not answer in time
    /// - `ServiceUnavailable` if the backend cannot be reached
    /// - `MalformedPayload` if the profile cannot be parsed
    /// - `Internal` for unexpected errors
    async fn resolve(&self, credential: &Credential) -> Result<Principal, PrincipalResolverError>;
}
