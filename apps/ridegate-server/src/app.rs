//! Wiring of resolver, gateway and site into one router.

use std::sync::Arc;

use access_gateway::AccessGateway;
use anyhow::{Context, Result};
use axum::Router;
use principal_resolver::{PrincipalResolver, ResolverPlugin};
use principal_resolver_sdk::{PrincipalResolverClient, PrincipalResolverPluginClient};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AppConfig;

/// Build the resolver client for the configured plugin.
///
/// # Errors
/// Returns an error if the selected plugin rejects its configuration.
pub fn build_resolver(cfg: &AppConfig) -> Result<Arc<dyn PrincipalResolverClient>> {
    let plugin: Arc<dyn PrincipalResolverPluginClient> = match cfg.resolver.plugin {
        ResolverPlugin::Http => {
            let plugin = http_principal_plugin::Service::from_config(&cfg.http_plugin)
                .context("http principal plugin")?;
            tracing::info!(endpoint = %plugin.endpoint(), "Resolving principals over HTTP");
            Arc::new(plugin)
        }
        ResolverPlugin::Static => {
            tracing::warn!("Static principal plugin enabled; do not use in production");
            Arc::new(
                static_principal_plugin::Service::from_config(&cfg.static_plugin)
                    .context("static principal plugin")?,
            )
        }
    };
    Ok(PrincipalResolver::new(&cfg.resolver, plugin).client())
}

/// Site files served behind the gate. Directories answer with their `index.html`.
fn site_router(cfg: &AppConfig) -> Router {
    let root = &cfg.server.site_root;
    let serve_dir = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(root.join("404.html")));
    Router::new().fallback_service(serve_dir)
}

/// Full application router.
///
/// # Errors
/// Returns an error if the resolver plugin or the route table is misconfigured.
pub fn build_router(cfg: &AppConfig) -> Result<Router> {
    let resolver = build_resolver(cfg)?;
    let gateway =
        AccessGateway::new(cfg.access.clone(), resolver).context("invalid access route table")?;
    Ok(gateway.build_router(site_router(cfg), cfg.server.request_timeout()))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::write(dir.path().join("404.html"), "<h1>missing</h1>").unwrap();
        std::fs::create_dir(dir.path().join("about")).unwrap();
        std::fs::write(dir.path().join("about").join("index.html"), "<h1>about</h1>").unwrap();
        std::fs::create_dir_all(dir.path().join("driver").join("dashboard")).unwrap();
        std::fs::write(
            dir.path().join("driver").join("dashboard").join("index.html"),
            "<h1>driver</h1>",
        )
        .unwrap();
        std::fs::create_dir_all(dir.path().join("driver").join("offer-ride")).unwrap();
        std::fs::write(
            dir.path().join("driver").join("offer-ride").join("index.html"),
            "<h1>ride offer form</h1>",
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("admin")).unwrap();
        std::fs::write(dir.path().join("admin").join("index.html"), "<h1>admin console</h1>").unwrap();
        std::fs::create_dir(dir.path().join("images-gallery")).unwrap();
        std::fs::write(
            dir.path().join("images-gallery").join("index.html"),
            "<h1>gallery</h1>",
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images").join("car.svg"), "<svg/>").unwrap();
        dir
    }

    fn config(site_root: &std::path::Path) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.server.site_root = site_root.to_path_buf();
        cfg.resolver.plugin = ResolverPlugin::Static;
        cfg.static_plugin = driver_tokens();
        cfg
    }

    fn driver_tokens() -> static_principal_plugin::StaticPrincipalPluginConfig {
        use principal_resolver_sdk::UserProfile;
        use static_principal_plugin::config::TokenMapping;

        static_principal_plugin::StaticPrincipalPluginConfig {
            tokens: vec![
                TokenMapping {
                    token: "valid-driver-session-token".to_owned(),
                    profile: UserProfile {
                        id: "driver789".to_owned(),
                        first_name: Some("Driver".to_owned()),
                        last_name: None,
                        email: "d@ex.com".to_owned(),
                        roles: vec!["DRIVER".to_owned()],
                        driver_status: Some("PENDING_APPROVAL".to_owned()),
                    },
                },
                TokenMapping {
                    token: "valid-passenger-session-token".to_owned(),
                    profile: UserProfile {
                        id: "passenger123".to_owned(),
                        first_name: Some("Passenger".to_owned()),
                        last_name: None,
                        email: "p@ex.com".to_owned(),
                        roles: vec!["PASSENGER".to_owned()],
                        driver_status: None,
                    },
                },
            ],
        }
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn serves_public_page_from_site_root() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let response = router.oneshot(get("/about/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "<h1>about</h1>");
    }

    #[tokio::test]
    async fn gated_page_needs_session_before_files_are_touched() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let anonymous = router.clone().oneshot(get("/", None)).await.unwrap();
        let signed_in = router
            .oneshot(get("/", Some("token=valid-driver-session-token")))
            .await
            .unwrap();

        assert_eq!(anonymous.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(signed_in.status(), StatusCode::OK);
        assert_eq!(body(signed_in).await, "<h1>home</h1>");
    }

    #[tokio::test]
    async fn driver_section_served_to_driver() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let response = router
            .oneshot(get(
                "/driver/dashboard/",
                Some("token=valid-driver-session-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "<h1>driver</h1>");
    }

    #[tokio::test]
    async fn missing_page_uses_not_found_document() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let response = router
            .oneshot(get("/contact/", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(response).await, "<h1>missing</h1>");
    }

    #[tokio::test]
    async fn section_page_files_are_gated() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let anonymous = router
            .clone()
            .oneshot(get("/admin/index.html", None))
            .await
            .unwrap();
        let pending_driver = router
            .oneshot(get(
                "/driver/offer-ride/index.html",
                Some("token=valid-driver-session-token"),
            ))
            .await
            .unwrap();

        assert_eq!(anonymous.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(pending_driver.status(), StatusCode::FORBIDDEN);
        assert!(!body(pending_driver).await.contains("ride offer form"));
    }

    #[tokio::test]
    async fn static_prefix_lookalike_needs_session() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let gallery = router
            .clone()
            .oneshot(get("/images-gallery/", None))
            .await
            .unwrap();
        let asset = router.oneshot(get("/images/car.svg", None)).await.unwrap();

        assert_eq!(gallery.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(asset.status(), StatusCode::OK);
        assert_eq!(body(asset).await, "<svg/>");
    }

    #[tokio::test]
    async fn encoded_section_paths_do_not_reach_files() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();
        let passenger = Some("token=valid-passenger-session-token");
        let driver = Some("token=valid-driver-session-token");

        for (path, cookie) in [
            ("/%61dmin/", passenger),
            ("//admin/", passenger),
            ("/driver/offer%2Dride/", driver),
        ] {
            let response = router.clone().oneshot(get(path, cookie)).await.unwrap();

            assert_ne!(response.status(), StatusCode::OK, "{path}");
            let page = body(response).await;
            assert!(!page.contains("admin console") && !page.contains("ride offer form"), "{path}");
        }
    }

    #[tokio::test]
    async fn driver_reaches_plain_section_files() {
        let dir = site();
        let router = build_router(&config(dir.path())).unwrap();

        let response = router
            .oneshot(get(
                "//driver/dashboard/index.html",
                Some("token=valid-driver-session-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "<h1>driver</h1>");
    }

    #[test]
    fn invalid_route_table_fails_startup() {
        let dir = site();
        let mut cfg = config(dir.path());
        cfg.access.auth_only_paths.push("/dashboard".to_owned());

        let err = build_router(&cfg).unwrap_err();

        assert!(format!("{err:#}").contains("/dashboard"));
    }

    #[test]
    fn invalid_backend_url_fails_startup() {
        let mut cfg = AppConfig::default();
        cfg.http_plugin.base_url = "not a url".to_owned();

        assert!(build_resolver(&cfg).is_err());
    }
}
