//! Configuration for the static principal resolver plugin.

use principal_resolver_sdk::UserProfile;
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticPrincipalPluginConfig {
    /// Static token-to-profile mappings.
    pub tokens: Vec<TokenMapping>,
}

/// Maps a static token to a profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The session token value to match.
    pub token: String,
    /// The profile to return when this token is presented, in backend wire format.
    pub profile: UserProfile,
}
