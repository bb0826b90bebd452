//! Principal resolver service: one bounded lookup per navigation.

use std::sync::Arc;
use std::time::Duration;

use principal_resolver_sdk::PrincipalResolverPluginClient;
use ridegate_security::{Credential, Principal};

use super::DomainError;

/// Delegates lookups to the selected plugin under a timeout.
///
/// Holds no per-principal state: nothing resolved for one navigation is reused
/// for the next.
pub struct Service {
    plugin: Arc<dyn PrincipalResolverPluginClient>,
    plugin_name: &'static str,
    timeout: Duration,
}

impl Service {
    #[must_use]
    pub fn new(
        plugin: Arc<dyn PrincipalResolverPluginClient>,
        plugin_name: &'static str,
        timeout: Duration,
    ) -> Self {
        Self {
            plugin,
            plugin_name,
            timeout,
        }
    }

    /// Resolve the principal behind `credential`.
    ///
    /// # Errors
    /// Returns [`DomainError::Timeout`] when the plugin does not answer within the
    /// configured timeout, or the plugin's own failure mapped into the domain.
    pub async fn resolve(&self, credential: &Credential) -> Result<Principal, DomainError> {
        match tokio::time::timeout(self.timeout, self.plugin.resolve(credential)).await {
            Ok(Ok(principal)) => Ok(principal),
            Ok(Err(e)) => Err(DomainError::from_plugin(self.plugin_name, e)),
            Err(_elapsed) => Err(DomainError::Timeout {
                plugin: self.plugin_name,
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}
