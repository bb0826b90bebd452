//! Principal resolver module.

use std::sync::Arc;

use principal_resolver_sdk::{PrincipalResolverClient, PrincipalResolverPluginClient};
use tracing::info;

use crate::config::{PrincipalResolverConfig, ResolverPlugin};
use crate::domain::{PrincipalResolverLocalClient, Service};

/// Principal resolver module.
///
/// Wires the selected plugin behind the public [`PrincipalResolverClient`] API.
pub struct PrincipalResolver {
    service: Arc<Service>,
}

impl PrincipalResolver {
    #[must_use]
    pub fn new(cfg: &PrincipalResolverConfig, plugin: Arc<dyn PrincipalResolverPluginClient>) -> Self {
        let plugin_name = match cfg.plugin {
            ResolverPlugin::Http => "http",
            ResolverPlugin::Static => "static",
        };
        info!(
            plugin = plugin_name,
            timeout_ms = cfg.timeout_ms,
            "Initializing principal_resolver"
        );

        Self {
            service: Arc::new(Service::new(plugin, plugin_name, cfg.timeout())),
        }
    }

    /// Client to hand to consumers (the access gateway).
    #[must_use]
    pub fn client(&self) -> Arc<dyn PrincipalResolverClient> {
        Arc::new(PrincipalResolverLocalClient::new(self.service.clone()))
    }
}
