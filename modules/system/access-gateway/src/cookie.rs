//! Session cookie handling.

use http::HeaderMap;
use http::header::{COOKIE, HeaderValue, InvalidHeaderValue};
use ridegate_security::Credential;

use crate::config::AccessConfig;

/// Read the session credential from the request's `Cookie` headers.
///
/// Returns `None` when the cookie is missing, empty or carries an expired JWT,
/// so an expired session is handled exactly like a missing one.
#[must_use]
pub fn credential_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Credential> {
    let raw = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find_map(|(name, value)| (name.trim() == cookie_name).then_some(value.trim()))?;

    let value = urlencoding::decode(raw).ok()?;
    let credential = Credential::new(value.into_owned()).ok()?;

    match credential.check_expiry() {
        Ok(()) => Some(credential),
        Err(e) => {
            tracing::debug!(error = %e, "Session credential expired");
            None
        }
    }
}

/// `Set-Cookie` value storing a new session credential.
///
/// # Errors
/// Returns an error if the cookie name or path cannot form a header value.
pub fn session_cookie(cfg: &AccessConfig, credential: &Credential) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
        cfg.cookie_name,
        urlencoding::encode(credential.expose()),
        cfg.cookie_max_age_secs,
    );
    if cfg.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// `Set-Cookie` value that removes the session credential.
///
/// # Errors
/// Returns an error if the configured cookie name is not a valid header value.
pub fn clear_cookie(cfg: &AccessConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{}=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly", cfg.cookie_name);
    if cfg.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Post-login target, restricted to local paths.
///
/// Anything that is not an absolute path on this site (`//host`, `/\host`,
/// `https://...`, empty) falls back to `fallback`. Browsers drop tabs and
/// newlines from `Location` and read `\` as `/`, so targets containing
/// whitespace, control characters or a backslash fall back too.
#[must_use]
pub fn safe_redirect_target<'a>(target: Option<&'a str>, fallback: &'a str) -> &'a str {
    match target {
        Some(t)
            if t.starts_with('/')
                && !t.starts_with("//")
                && !t.contains(|c: char| c == '\\' || c.is_whitespace() || c.is_control()) =>
        {
            t
        }
        _ => fallback,
    }
}
