//! Service implementation for the static principal resolver plugin.

use std::collections::HashMap;

use principal_resolver_sdk::PrincipalResolverError;
use ridegate_security::Principal;
use tracing::info;

use crate::config::StaticPrincipalPluginConfig;

/// Static principal resolver service.
///
/// Profiles are validated once at construction, so a bad role in the
/// configuration fails startup instead of every lookup.
pub struct Service {
    token_map: HashMap<String, Principal>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    /// Returns `MalformedPayload` if a configured profile is invalid (unknown role,
    /// empty id) or a token is empty.
    pub fn from_config(cfg: &StaticPrincipalPluginConfig) -> Result<Self, PrincipalResolverError> {
        let mut token_map = HashMap::with_capacity(cfg.tokens.len());
        for mapping in &cfg.tokens {
            if mapping.token.is_empty() {
                return Err(PrincipalResolverError::MalformedPayload(
                    "static token must not be empty".to_owned(),
                ));
            }
            let principal = Principal::try_from(mapping.profile.clone())?;
            token_map.insert(mapping.token.clone(), principal);
        }

        info!(
            token_count = token_map.len(),
            "Loaded static principal plugin configuration"
        );
        Ok(Self { token_map })
    }

    /// Look up the profile for a token. `None` for unknown tokens.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<Principal> {
        self.token_map.get(token).cloned()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use principal_resolver_sdk::UserProfile;
    use ridegate_security::{DriverStatus, Role};

    use super::*;
    use crate::config::TokenMapping;

    fn profile(id: &str, roles: &[&str], driver_status: Option<&str>) -> UserProfile {
        UserProfile {
            id: id.to_owned(),
            first_name: Some("Test".to_owned()),
            last_name: None,
            email: format!("{id}@ex.com"),
            roles: roles.iter().map(|r| (*r).to_owned()).collect(),
            driver_status: driver_status.map(str::to_owned),
        }
    }

    fn config(tokens: Vec<TokenMapping>) -> StaticPrincipalPluginConfig {
        StaticPrincipalPluginConfig { tokens }
    }

    #[test]
    fn mapped_token_returns_profile() {
        let service = Service::from_config(&config(vec![TokenMapping {
            token: "valid-driver-session-token".to_owned(),
            profile: profile("driver789", &["DRIVER"], Some("APPROVED")),
        }]))
        .unwrap();

        let principal = service.lookup("valid-driver-session-token").unwrap();
        assert_eq!(principal.id(), "driver789");
        assert!(principal.has_role(Role::Driver));
        assert_eq!(principal.driver_status(), DriverStatus::Approved);
    }

    #[test]
    fn unknown_token_returns_none() {
        let service = Service::from_config(&config(vec![TokenMapping {
            token: "known".to_owned(),
            profile: profile("p1", &["PASSENGER"], None),
        }]))
        .unwrap();

        assert!(service.lookup("unknown").is_none());
    }

    #[test]
    fn invalid_role_in_config_fails_construction() {
        let result = Service::from_config(&config(vec![TokenMapping {
            token: "t".to_owned(),
            profile: profile("p1", &["CAPTAIN"], None),
        }]));

        assert!(matches!(
            result,
            Err(PrincipalResolverError::MalformedPayload(_))
        ));
    }

    #[test]
    fn empty_token_in_config_fails_construction() {
        let result = Service::from_config(&config(vec![TokenMapping {
            token: String::new(),
            profile: profile("p1", &["PASSENGER"], None),
        }]));

        assert!(result.is_err());
    }
}
