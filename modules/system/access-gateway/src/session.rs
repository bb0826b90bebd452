//! Session endpoints served outside the access gate.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use http::HeaderMap;
use http::header::SET_COOKIE;
use serde::Deserialize;

use ridegate_security::{Credential, Principal};

use crate::auth::{AuthState, log_resolution_error};
use crate::cookie;
use crate::error::Problem;

pub const SESSION_PATH: &str = "/session";
pub const LOGOUT_PATH: &str = "/logout";
pub const CURRENT_SESSION_PATH: &str = "/api/session";
pub const HEALTH_PATH: &str = "/healthz";

/// Body of `POST /session`, sent by the login page after the backend issued a token.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionRequest {
    pub token: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Store the credential cookie and send the visitor where they were going.
pub async fn create_session(
    State(state): State<AuthState>,
    Json(body): Json<SessionRequest>,
) -> Response {
    let Ok(credential) = Credential::new(body.token) else {
        return Problem::bad_request("Session token must not be empty").into_response();
    };
    if let Err(e) = credential.check_expiry() {
        tracing::debug!(error = %e, "Refusing to store expired credential");
        return Problem::bad_request("Session token has expired").into_response();
    }

    let cookie = match cookie::session_cookie(&state.config, &credential) {
        Ok(cookie) => cookie,
        Err(e) => {
            tracing::error!(error = %e, "Cannot build session cookie header");
            return Problem::bad_request("Session token cannot be stored in a cookie")
                .into_response();
        }
    };

    let target = cookie::safe_redirect_target(body.redirect.as_deref(), state.policy.home_path());
    tracing::debug!(target = %target, "Session created");
    ([(SET_COOKIE, cookie)], Redirect::to(target)).into_response()
}

/// Drop the credential cookie and return to the login page.
pub async fn logout(State(state): State<AuthState>) -> Response {
    let redirect = Redirect::to(state.policy.login_path());
    match cookie::clear_cookie(&state.config) {
        Ok(cookie) => ([(SET_COOKIE, cookie)], redirect).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Cannot build cookie removal header");
            Problem::internal("Cannot clear session").into_response()
        }
    }
}

/// Profile of the signed-in principal, for pages that show the user's name and roles.
pub async fn current_session(
    State(state): State<AuthState>,
    headers: HeaderMap,
) -> Result<Json<Principal>, Problem> {
    let Some(credential) = cookie::credential_from_headers(&headers, &state.config.cookie_name) else {
        return Err(Problem::unauthorized("No active session"));
    };

    match state.resolver.resolve(&credential).await {
        Ok(principal) => Ok(Json(principal)),
        Err(err) => {
            log_resolution_error(CURRENT_SESSION_PATH, &err);
            Err(Problem::unauthorized("Session could not be resolved"))
        }
    }
}
