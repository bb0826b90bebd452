//! Edge access policy.
//!
//! [`AccessPolicy::evaluate`] is a pure function of the route table, the
//! request target and whether a credential is present. It never looks at the
//! credential's contents and never performs I/O.

use std::sync::Arc;

use crate::config::AccessConfig;
use crate::routes::RouteTable;

/// Outcome of evaluating one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Proceed,
    /// Send the visitor to the login page, remembering where they were going.
    RedirectToLogin(String),
    /// Send an authenticated visitor away from an auth-only page.
    RedirectHome(String),
}

impl AccessDecision {
    /// Redirect target, if the decision is a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            AccessDecision::Proceed => None,
            AccessDecision::RedirectToLogin(location) | AccessDecision::RedirectHome(location) => {
                Some(location)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    routes: Arc<RouteTable>,
    login_path: String,
    home_path: String,
}

impl AccessPolicy {
    #[must_use]
    pub fn new(routes: Arc<RouteTable>, cfg: &AccessConfig) -> Self {
        Self {
            routes,
            login_path: cfg.login_path.clone(),
            home_path: cfg.home_path.clone(),
        }
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decide one navigation. `path` is expected in the form produced by
    /// [`crate::routes::canonical_path`].
    #[must_use]
    pub fn evaluate(&self, path: &str, query: Option<&str>, has_credential: bool) -> AccessDecision {
        if self.routes.is_static_asset(path) {
            return AccessDecision::Proceed;
        }

        let public = self.routes.is_public(path);
        if !public && !has_credential {
            return AccessDecision::RedirectToLogin(self.login_redirect(path, query));
        }

        if has_credential && self.routes.is_auth_only(path) {
            return AccessDecision::RedirectHome(self.home_path.clone());
        }

        AccessDecision::Proceed
    }

    /// Login URL carrying the original target as an encoded `redirect` parameter.
    #[must_use]
    pub fn login_redirect(&self, path: &str, query: Option<&str>) -> String {
        let target = match query {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.to_owned(),
        };
        format!("{}?redirect={}", self.login_path, urlencoding::encode(&target))
    }

    #[must_use]
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}
