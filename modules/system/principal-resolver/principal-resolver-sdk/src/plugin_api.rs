//! Plugin API trait for principal resolver implementations.
//!
//! Plugins implement this trait to look up profiles. The resolver module wraps the
//! selected plugin with the timeout and failure logging shared by all plugins.

use async_trait::async_trait;
use ridegate_security::{Credential, Principal};

use crate::error::PrincipalResolverError;

/// Plugin API trait for principal resolver implementations.
#[async_trait]
pub trait PrincipalResolverPluginClient: Send + Sync {
    /// Look up the principal for a credential.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the credential is unknown or rejected
    /// - `ServiceUnavailable` / `MalformedPayload` / `Internal` for lookup failures
    async fn resolve(&self, credential: &Credential) -> Result<Principal, PrincipalResolverError>;
}
