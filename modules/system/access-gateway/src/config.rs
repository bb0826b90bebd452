use ridegate_security::Role;
use serde::{Deserialize, Serialize};

const SEVEN_DAYS_SECS: u64 = 7 * 24 * 60 * 60;

fn default_cookie_name() -> String {
    "token".to_owned()
}

fn default_cookie_max_age_secs() -> u64 {
    SEVEN_DAYS_SECS
}

fn default_login_path() -> String {
    "/login".to_owned()
}

fn default_home_path() -> String {
    "/".to_owned()
}

fn owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| (*p).to_owned()).collect()
}

fn default_public_paths() -> Vec<String> {
    owned(&[
        "/landing", "/login", "/register", "/about", "/contact", "/privacy", "/terms",
    ])
}

fn default_auth_only_paths() -> Vec<String> {
    owned(&["/login", "/register", "/landing"])
}

fn default_static_prefixes() -> Vec<String> {
    owned(&["/_next", "/icons", "/images"])
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("/driver", Role::Driver),
        SectionConfig::new("/driver/offer-ride", Role::Driver).with_driver_approval(),
        SectionConfig::new("/admin", Role::Admin),
        SectionConfig::new("/passenger", Role::Passenger),
    ]
}

/// Access gateway configuration.
///
/// Loaded from the `access` section of the application config; every field
/// has a default matching the carpooling frontend's layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct AccessConfig {
    /// Name of the cookie holding the session credential.
    pub cookie_name: String,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// Lifetime of the session cookie set by `POST /session`.
    pub cookie_max_age_secs: u64,
    pub login_path: String,
    pub home_path: String,
    /// Paths reachable without a credential (and their sub-paths).
    pub public_paths: Vec<String>,
    /// Public paths an authenticated visitor is bounced away from.
    pub auth_only_paths: Vec<String>,
    /// Framework directories (and their contents) that skip evaluation entirely.
    pub static_prefixes: Vec<String>,
    /// Role-restricted sections. The longest matching section wins.
    pub sections: Vec<SectionConfig>,
    pub remediation: RemediationConfig,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            cookie_max_age_secs: default_cookie_max_age_secs(),
            login_path: default_login_path(),
            home_path: default_home_path(),
            public_paths: default_public_paths(),
            auth_only_paths: default_auth_only_paths(),
            static_prefixes: default_static_prefixes(),
            sections: default_sections(),
            remediation: RemediationConfig::default(),
        }
    }
}

/// A role-restricted section of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    pub path: String,
    pub role: Role,
    /// Require an approved driver profile on top of the role.
    #[serde(default)]
    pub require_driver_approval: bool,
}

impl SectionConfig {
    #[must_use]
    pub fn new(path: &str, role: Role) -> Self {
        Self {
            path: path.to_owned(),
            role,
            require_driver_approval: false,
        }
    }

    #[must_use]
    pub fn with_driver_approval(mut self) -> Self {
        self.require_driver_approval = true;
        self
    }
}

/// Pages a driver is sent to when their profile is not approved yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct RemediationConfig {
    /// Status check for `PENDING_APPROVAL`.
    pub pending: String,
    /// Document resubmission for `REJECTED`.
    pub rejected: String,
    /// Onboarding for `NONE`.
    pub onboarding: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            pending: "/profile-settings/upload-documents".to_owned(),
            rejected: "/profile-settings/upload-documents".to_owned(),
            onboarding: "/profile-settings/complete-account".to_owned(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_frontend_layout() {
        let cfg = AccessConfig::default();

        assert_eq!(cfg.cookie_name, "token");
        assert_eq!(cfg.cookie_max_age_secs, 604_800);
        assert_eq!(cfg.public_paths.len(), 7);
        assert!(
            cfg.auth_only_paths
                .iter()
                .all(|p| cfg.public_paths.contains(p))
        );
        assert!(cfg.sections.iter().any(|s| s.require_driver_approval));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: AccessConfig = serde_json::from_value(serde_json::json!({
            "cookie_name": "session",
            "sections": [{ "path": "/ops", "role": "ROLE_ADMIN" }]
        }))
        .unwrap();

        assert_eq!(cfg.cookie_name, "session");
        assert_eq!(cfg.login_path, "/login");
        assert_eq!(cfg.sections, vec![SectionConfig::new("/ops", Role::Admin)]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<AccessConfig, _> =
            serde_json::from_value(serde_json::json!({ "cookie": "token" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_role_is_rejected() {
        let result: Result<SectionConfig, _> =
            serde_json::from_value(serde_json::json!({ "path": "/x", "role": "SUPERVISOR" }));

        assert!(result.is_err());
    }
}
