//! Configuration for the principal resolver.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_ms() -> u64 {
    5_000
}

/// Configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrincipalResolverConfig {
    /// Plugin that performs the lookup.
    pub plugin: ResolverPlugin,

    /// Upper bound for a single lookup. A lookup that takes longer is treated as
    /// unauthenticated.
    pub timeout_ms: u64,
}

impl PrincipalResolverConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for PrincipalResolverConfig {
    fn default() -> Self {
        Self {
            plugin: ResolverPlugin::Http,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Plugin selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolverPlugin {
    /// Ask the backend's `/api/users/me`.
    #[default]
    Http,
    /// Fixed token-to-profile mapping for development and tests.
    Static,
}
