//! Client implementation for the HTTP principal resolver plugin.

use async_trait::async_trait;
use principal_resolver_sdk::{PrincipalResolverError, PrincipalResolverPluginClient};
use ridegate_security::{Credential, Principal};

use super::service::Service;

#[async_trait]
impl PrincipalResolverPluginClient for Service {
    async fn resolve(&self, credential: &Credential) -> Result<Principal, PrincipalResolverError> {
        self.fetch_principal(credential).await
    }
}
