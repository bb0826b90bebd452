#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the HTTP principal plugin against a mock backend.

use std::time::Duration;

use http_principal_plugin::{HttpPrincipalPluginConfig, Service};
use httpmock::prelude::*;
use principal_resolver_sdk::{PrincipalResolverError, PrincipalResolverPluginClient};
use ridegate_security::{Credential, DriverStatus, Role};
use serde_json::json;

fn service_for(server: &MockServer, request_timeout_ms: u64) -> Service {
    Service::from_config(&HttpPrincipalPluginConfig {
        base_url: server.base_url(),
        request_timeout_ms,
        ..HttpPrincipalPluginConfig::default()
    })
    .expect("plugin should build")
}

fn credential(token: &str) -> Credential {
    Credential::new(token).unwrap()
}

#[tokio::test]
async fn resolves_profile_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users/me")
                .header("authorization", "Bearer driver-token");
            then.status(200).json_body(json!({
                "id": "driver789",
                "firstName": "Driver",
                "lastName": "One",
                "email": "d@ex.com",
                "roles": ["DRIVER"],
                "driverStatus": "PENDING_APPROVAL"
            }));
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let principal = plugin.resolve(&credential("driver-token")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(principal.id(), "driver789");
    assert!(principal.has_role(Role::Driver));
    assert_eq!(principal.driver_status(), DriverStatus::PendingApproval);
}

#[tokio::test]
async fn unauthorized_status_is_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(401);
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let err = plugin.resolve(&credential("stale")).await.unwrap_err();

    assert!(err.is_credential_rejected(), "got {err:?}");
}

#[tokio::test]
async fn non_200_success_status_is_not_a_principal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(204);
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(matches!(err, PrincipalResolverError::Unauthorized(_)));
}

#[tokio::test]
async fn server_error_is_unavailability() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(503);
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(matches!(err, PrincipalResolverError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(200).body("<html>login</html>");
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(matches!(err, PrincipalResolverError::MalformedPayload(_)));
}

#[tokio::test]
async fn unknown_role_in_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(200).json_body(json!({
                "id": "u1",
                "email": "u@ex.com",
                "roles": ["PASSENGER", "SUPERVISOR"]
            }));
        })
        .await;

    let plugin = service_for(&server, 2_000);
    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(matches!(err, PrincipalResolverError::MalformedPayload(_)));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/me");
            then.status(200)
                .delay(Duration::from_millis(1_500))
                .json_body(json!({ "id": "u1", "email": "u@ex.com", "roles": [] }));
        })
        .await;

    let plugin = service_for(&server, 100);
    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(matches!(err, PrincipalResolverError::Timeout(100)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_unavailability() {
    let plugin = Service::from_config(&HttpPrincipalPluginConfig {
        // Port 9 (discard) is not expected to be listening.
        base_url: "http://127.0.0.1:9".to_owned(),
        request_timeout_ms: 2_000,
        ..HttpPrincipalPluginConfig::default()
    })
    .unwrap();

    let err = plugin.resolve(&credential("tok")).await.unwrap_err();

    assert!(
        matches!(
            err,
            PrincipalResolverError::ServiceUnavailable(_) | PrincipalResolverError::Timeout(_)
        ),
        "got {err:?}"
    );
}
