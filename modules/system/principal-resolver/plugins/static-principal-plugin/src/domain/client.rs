//! Client implementation for the static principal resolver plugin.
//!
//! Implements `PrincipalResolverPluginClient` using the domain service.

use async_trait::async_trait;
use principal_resolver_sdk::{PrincipalResolverError, PrincipalResolverPluginClient};
use ridegate_security::{Credential, Principal};

use super::service::Service;

#[async_trait]
impl PrincipalResolverPluginClient for Service {
    async fn resolve(&self, credential: &Credential) -> Result<Principal, PrincipalResolverError> {
        self.lookup(credential.expose())
            .ok_or_else(|| PrincipalResolverError::Unauthorized("unknown session token".to_owned()))
    }
}
