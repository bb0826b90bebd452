use std::sync::Arc;

use crate::credential::Credential;
use crate::principal::Principal;

/// `AuthContext` carries the authentication state of one navigation.
///
/// The gateway builds it from the request cookie, fills in the principal once a
/// section gate has resolved one, and inserts it into the request extensions so
/// handlers read it explicitly instead of reaching for ambient state.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    credential: Option<Credential>,
    principal: Option<Arc<Principal>>,
}

impl AuthContext {
    /// Context for a request without a session credential.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a request carrying a credential that has not been resolved yet.
    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
            principal: None,
        }
    }

    /// Attach the principal resolved for this navigation.
    #[must_use]
    pub fn resolved(mut self, principal: Arc<Principal>) -> Self {
        self.principal = Some(principal);
        self
    }

    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    #[must_use]
    pub fn principal(&self) -> Option<&Arc<Principal>> {
        self.principal.as_ref()
    }

    /// Whether a credential is present. Says nothing about its validity.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}
