//! Session credential carried by the auth cookie.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use time::OffsetDateTime;

/// Opaque bearer token identifying a session.
///
/// The value is wrapped in `SecretString` so `Debug` output never shows it.
#[derive(Debug, Clone)]
pub struct Credential {
    token: SecretString,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("credential is empty")]
    Empty,
    #[error("credential expired at unix time {0}")]
    Expired(i64),
}

impl Credential {
    /// Wrap a raw token.
    ///
    /// # Errors
    /// Returns [`CredentialError::Empty`] for an empty or whitespace-only token.
    pub fn new(token: impl Into<String>) -> Result<Self, CredentialError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self {
            token: SecretString::from(token),
        })
    }

    /// Raw token, for the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.token.expose_secret()
    }

    /// `exp` claim when the token is a JWT; `None` for opaque tokens.
    ///
    /// The signature is not checked: this only lets the gateway drop credentials the
    /// backend would reject anyway. The backend stays the authority.
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        let mut parts = self.expose().split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
        match claims.get("exp")? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reject the credential if its `exp` claim is at or before `now` (unix seconds).
    ///
    /// # Errors
    /// Returns [`CredentialError::Expired`] for an expired JWT.
    pub fn check_expiry_at(&self, now: i64) -> Result<(), CredentialError> {
        match self.expires_at() {
            Some(exp) if exp <= now => Err(CredentialError::Expired(exp)),
            _ => Ok(()),
        }
    }

    /// [`Credential::check_expiry_at`] against the current clock.
    ///
    /// # Errors
    /// Returns [`CredentialError::Expired`] for an expired JWT.
    pub fn check_expiry(&self) -> Result<(), CredentialError> {
        self.check_expiry_at(OffsetDateTime::now_utc().unix_timestamp())
    }
}
