//! Access gateway definition.
//!
//! Owns the access state and assembles the HTTP stack around the site router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use http::{HeaderName, StatusCode};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use principal_resolver_sdk::PrincipalResolverClient;

use crate::auth::{self, AuthState};
use crate::config::AccessConfig;
use crate::gate::RoleGate;
use crate::policy::AccessPolicy;
use crate::routes::{RouteTable, RouteTableError};
use crate::session;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Edge access gateway: session endpoints plus the access and section gates.
pub struct AccessGateway {
    state: AuthState,
}

impl AccessGateway {
    /// Build the gateway, validating the route table.
    ///
    /// # Errors
    /// Returns [`RouteTableError`] if the configured route table is invalid.
    pub fn new(
        config: AccessConfig,
        resolver: Arc<dyn PrincipalResolverClient>,
    ) -> Result<Self, RouteTableError> {
        let routes = Arc::new(RouteTable::from_config(&config)?);
        let policy = Arc::new(AccessPolicy::new(routes, &config));
        let gate = Arc::new(RoleGate::new(config.remediation.clone()));

        tracing::info!(
            cookie_name = %config.cookie_name,
            public_paths = config.public_paths.len(),
            auth_only_paths = config.auth_only_paths.len(),
            sections = config.sections.len(),
            "Access route table built"
        );

        Ok(Self {
            state: AuthState {
                config: Arc::new(config),
                policy,
                gate,
                resolver,
            },
        })
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Session endpoints. They sit outside the access gate.
    #[must_use]
    pub fn session_router(&self) -> Router {
        Router::new()
            .route(session::SESSION_PATH, post(session::create_session))
            .route(
                session::LOGOUT_PATH,
                get(session::logout).post(session::logout),
            )
            .route(session::CURRENT_SESSION_PATH, get(session::current_session))
            .route(session::HEALTH_PATH, get(|| async { "ok" }))
            .with_state(self.state.clone())
    }

    /// Wrap `router` (routes and fallback) in the access and section gates.
    #[must_use]
    pub fn apply_access_layers(&self, router: Router) -> Router {
        // Last added runs first: access evaluation, then the section gate.
        router
            .layer(from_fn_with_state(
                self.state.clone(),
                auth::section_gate_middleware,
            ))
            .layer(from_fn_with_state(self.state.clone(), auth::access_middleware))
    }

    /// Full application router: gated `site` plus the session endpoints, under
    /// the shared request-id, tracing and timeout layers.
    #[must_use]
    pub fn build_router(&self, site: Router, request_timeout: Duration) -> Router {
        let router = self
            .session_router()
            .merge(self.apply_access_layers(site));
        apply_middleware_stack(router, request_timeout)
    }
}

/// Outer HTTP layers shared by gated and session routes.
///
/// Request execution order (outermost -> innermost):
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> router.
#[must_use]
pub fn apply_middleware_stack(mut router: Router, request_timeout: Duration) -> Router {
    // 3) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        request_timeout,
    ));

    // 2) Trace
    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    module = "access_gateway",
                    request_id = %rid,
                    status = tracing::field::Empty,
                    latency_ms = tracing::field::Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    );

    // 1) Request ID handling: generate if missing, then echo it on the response.
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}
