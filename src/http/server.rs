//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the page routes
//! - Serve static assets ahead of the working-hours gate
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::gate::{working_hours_middleware, Clock, WorkingHoursGate};
use crate::observability::metrics;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Gated page routes and the view each one serves.
const PAGES: [(&str, &str); 3] = [
    ("/", "index.html"),
    ("/services", "services.html"),
    ("/contact", "contact.html"),
];

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server reading the time from `clock`.
    pub fn new(config: SiteConfig, clock: Arc<dyn Clock>) -> Self {
        let gate = WorkingHoursGate::new(config.access_window.to_window(), clock)
            .with_deny_status(config.access_window.deny_status);

        let router = Self::build_router(&config, gate);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, gate: WorkingHoursGate) -> Router {
        let pages = pages_router(&config.site.views_dir, gate);

        // Static assets answer first; anything they don't have falls through to the gated pages.
        let assets = ServeDir::new(&config.site.public_dir)
            .call_fallback_on_method_not_allowed(true)
            .fallback(pages);

        Router::new().fallback_service(assets).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(record_status))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                )))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            window_open = self.config.access_window.open_hour,
            window_close = self.config.access_window.close_hour,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Page routes, every one of them behind the gate.
fn pages_router(views_dir: &Path, gate: WorkingHoursGate) -> Router {
    PAGES
        .iter()
        .fold(Router::new(), |router, (route, view)| {
            router.route_service(route, ServeFile::new(views_dir.join(view)))
        })
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(gate, working_hours_middleware))
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}

/// Metric label for a request path: the page route itself, or `other`.
fn route_label(path: &str) -> &'static str {
    PAGES
        .iter()
        .map(|(route, _)| *route)
        .find(|route| *route == path)
        .unwrap_or("other")
}

async fn record_status(request: Request<Body>, next: Next) -> Response {
    let route = route_label(request.uri().path());
    let response = next.run(request).await;
    metrics::record_request(route, response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{FixedClock, DENIAL_MESSAGE};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let views = dir.path().join("views");
        let public = dir.path().join("public");
        fs::create_dir_all(&views).unwrap();
        fs::create_dir_all(&public).unwrap();
        fs::write(views.join("index.html"), "<h1>Home</h1>").unwrap();
        fs::write(views.join("services.html"), "<h1>Services</h1>").unwrap();
        fs::write(views.join("contact.html"), "<h1>Contact</h1>").unwrap();
        fs::write(public.join("style.css"), "body { margin: 0; }").unwrap();

        let mut config = SiteConfig::default();
        config.site.views_dir = views;
        config.site.public_dir = public;
        (dir, config)
    }

    async fn get(server: &HttpServer, path: &str) -> (StatusCode, String, Option<String>) {
        let response = server
            .router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), request_id)
    }

    #[tokio::test]
    async fn serves_pages_during_working_hours() {
        let (_dir, config) = site();
        let server = HttpServer::new(config, Arc::new(FixedClock(at(1, 10))));

        for (path, expected) in [
            ("/", "<h1>Home</h1>"),
            ("/services", "<h1>Services</h1>"),
            ("/contact", "<h1>Contact</h1>"),
        ] {
            let (status, body, _) = get(&server, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn every_page_is_gated() {
        let (_dir, config) = site();
        let server = HttpServer::new(config, Arc::new(FixedClock(at(7, 14))));

        for path in ["/", "/services", "/contact"] {
            let (status, body, _) = get(&server, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, DENIAL_MESSAGE);
        }
    }

    #[tokio::test]
    async fn static_assets_bypass_the_gate() {
        let (_dir, config) = site();
        let server = HttpServer::new(config, Arc::new(FixedClock(at(7, 23))));

        let (status, body, _) = get(&server, "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn unknown_paths_are_gated_then_404() {
        let (_dir, config) = site();

        let open = HttpServer::new(config.clone(), Arc::new(FixedClock(at(2, 11))));
        let (status, body, _) = get(&open, "/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Cannot GET /pricing");

        let closed = HttpServer::new(config, Arc::new(FixedClock(at(6, 11))));
        let (status, body, _) = get(&closed, "/pricing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DENIAL_MESSAGE);
    }

    #[tokio::test]
    async fn configured_deny_status_is_used() {
        let (_dir, mut config) = site();
        config.access_window.deny_status = StatusCode::FORBIDDEN;
        let server = HttpServer::new(config, Arc::new(FixedClock(at(3, 17))));

        let (status, body, _) = get(&server, "/").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, DENIAL_MESSAGE);
    }

    #[test]
    fn route_labels_are_bounded() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/services"), "/services");
        assert_eq!(route_label("/contact"), "/contact");
        assert_eq!(route_label("/style.css"), "other");
        assert_eq!(route_label("/contact/../../etc/passwd"), "other");
        assert_eq!(route_label("/services/"), "other");
    }

    #[tokio::test]
    async fn run_returns_once_shutdown_resolves() {
        let (_dir, config) = site();
        let server = HttpServer::new(config, Arc::new(FixedClock(at(1, 10))));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            server.run(listener, std::future::ready(())),
        )
        .await
        .expect("server stopped");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let (_dir, config) = site();
        let server = HttpServer::new(config, Arc::new(FixedClock(at(1, 10))));

        let (_, _, request_id) = get(&server, "/").await;
        let request_id = request_id.expect("x-request-id header");
        assert!(uuid::Uuid::parse_str(&request_id).is_ok());
    }
}
