//! Application configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the YAML file given on
//! the command line, then `RIDEGATE__`-prefixed environment variables with `__`
//! separating nested keys (`RIDEGATE__ACCESS__COOKIE_NAME`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use access_gateway::AccessConfig;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use http_principal_plugin::HttpPrincipalPluginConfig;
use principal_resolver::PrincipalResolverConfig;
use serde::{Deserialize, Serialize};
use static_principal_plugin::StaticPrincipalPluginConfig;

pub const ENV_PREFIX: &str = "RIDEGATE__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub access: AccessConfig,
    pub resolver: PrincipalResolverConfig,
    pub http_plugin: HttpPrincipalPluginConfig,
    pub static_plugin: StaticPrincipalPluginConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory holding the pre-rendered frontend.
    pub site_root: PathBuf,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_owned(),
            site_root: PathBuf::from("site"),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a layer does not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file '{}' does not exist", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}
