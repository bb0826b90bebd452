use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use http::StatusCode;
use http::header::SET_COOKIE;

use principal_resolver_sdk::{PrincipalResolverClient, PrincipalResolverError};
use ridegate_security::AuthContext;

use crate::config::AccessConfig;
use crate::cookie;
use crate::error::Problem;
use crate::gate::{GateOutcome, RoleGate, StatusNotice, UnauthorizedReason};
use crate::policy::{AccessDecision, AccessPolicy};
use crate::routes::{RouteClass, canonical_path};

/// Shared state for the access and section-gate middleware.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AccessConfig>,
    pub policy: Arc<AccessPolicy>,
    pub gate: Arc<RoleGate>,
    pub resolver: Arc<dyn PrincipalResolverClient>,
}

/// Canonical form of the request path, or a `400` for paths that have none.
fn request_path(req: &Request) -> Result<String, Response> {
    canonical_path(req.uri().path()).map_err(|e| {
        tracing::debug!(path = %req.uri().path(), error = %e, "Rejecting request path");
        Problem::bad_request(e.to_string()).into_response()
    })
}

/// Edge access middleware.
///
/// Reads the session cookie, runs the access policy on the canonical path and
/// either redirects or inserts an [`AuthContext`] for the rest of the stack.
pub async fn access_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = match request_path(&req) {
        Ok(path) => path,
        Err(response) => return response,
    };
    let credential = cookie::credential_from_headers(req.headers(), &state.config.cookie_name);
    let decision = state
        .policy
        .evaluate(&path, req.uri().query(), credential.is_some());

    match decision {
        AccessDecision::Proceed => {
            let ctx = credential.map_or_else(AuthContext::anonymous, AuthContext::with_credential);
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        AccessDecision::RedirectToLogin(location) => {
            tracing::debug!(path = %path, "No session, redirecting to login");
            Redirect::temporary(&location).into_response()
        }
        AccessDecision::RedirectHome(location) => {
            tracing::debug!(path = %path, "Already signed in, leaving auth-only page");
            Redirect::temporary(&location).into_response()
        }
    }
}

/// Role/status gate for role-restricted sections.
///
/// Must run inside [`access_middleware`]. Resolves the principal only when the
/// canonical path belongs to a section, asset files included; every failure
/// is fail-closed.
pub async fn section_gate_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = match request_path(&req) {
        Ok(path) => path,
        Err(response) => return response,
    };
    let RouteClass::RoleRestricted(section) = state.policy.routes().classify(&path) else {
        return next.run(req).await;
    };

    let ctx = req
        .extensions()
        .get::<AuthContext>()
        .cloned()
        .unwrap_or_default();
    let return_to = state.policy.login_redirect(&path, req.uri().query());

    let Some(credential) = ctx.credential() else {
        log_unauthorized(&path, UnauthorizedReason::NoPrincipal);
        return Redirect::temporary(&return_to).into_response();
    };

    let principal = match state.resolver.resolve(credential).await {
        Ok(principal) => Arc::new(principal),
        Err(err) => {
            log_resolution_error(&path, &err);
            return unauthorized_redirect(&state.config, &return_to, err.is_credential_rejected());
        }
    };

    match state.gate.check(section, Some(&principal)) {
        GateOutcome::Allow => {
            tracing::debug!(
                path = %path,
                section = section.path(),
                principal_id = principal.id(),
                "Section access granted"
            );
            req.extensions_mut().insert(ctx.resolved(principal));
            next.run(req).await
        }
        GateOutcome::Unauthorized(reason) => {
            log_unauthorized(&path, reason);
            Redirect::temporary(&return_to).into_response()
        }
        GateOutcome::StatusDenied(notice) => {
            tracing::debug!(
                path = %path,
                principal_id = principal.id(),
                driver_status = notice.status.as_str(),
                "Driver status does not unlock section"
            );
            status_denied_response(&path, &notice, state.policy.home_path())
        }
    }
}

/// Login redirect, dropping the cookie when the backend rejected it.
fn unauthorized_redirect(cfg: &AccessConfig, location: &str, clear_cookie: bool) -> Response {
    let mut response = Redirect::temporary(location).into_response();
    if clear_cookie {
        match cookie::clear_cookie(cfg) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Cannot build cookie removal header"),
        }
    }
    response
}

fn status_denied_response(path: &str, notice: &StatusNotice, home: &str) -> Response {
    Problem::new(StatusCode::FORBIDDEN, "Driver profile not approved", notice.message)
        .with_instance(path)
        .with_link("remediation", notice.remediation.clone())
        .with_link("home", home)
        .into_response()
}

fn log_unauthorized(path: &str, reason: UnauthorizedReason) {
    match reason {
        UnauthorizedReason::NoPrincipal => {
            tracing::debug!(path = %path, "Section requires a signed-in principal");
        }
        UnauthorizedReason::MissingRole(role) => {
            tracing::debug!(path = %path, required_role = %role, "Principal lacks section role");
        }
    }
}

/// Ties a resolution failure to the request path.
///
/// The resolver client already logs the failure at its level.
pub(crate) fn log_resolution_error(path: &str, err: &PrincipalResolverError) {
    tracing::debug!(path = %path, error = %err, "Principal not resolved");
}
