//! HTTP route handlers.
//!
//! The dispatch table is deliberately explicit: two GET routes, nothing else.
//! Anything unmatched falls through to Axum's default 404 (and 405 for a
//! known path with the wrong method). The status page gets a short public
//! cache header since its content is fixed per process; the health check is
//! never cached so liveness probes always see a fresh response.

pub mod health;
pub mod home;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Status page - cacheable, content is fixed for the process lifetime
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        // Per-request logging with method, path, status and latency
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Duration, Utc};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(hostname: &str) -> Router {
        create_router(AppState::new(hostname.to_string()))
    }

    async fn get_response(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_healthy_json() {
        let before = Utc::now();
        let response = get_response(test_app("test-host"), "/health").await;
        let after = Utc::now();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");

        // Timestamp is captured at request time and must fall inside the
        // observation window. Allow slack for millisecond truncation.
        let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        assert!(timestamp >= before - Duration::milliseconds(10));
        assert!(timestamp <= after);
    }

    #[tokio::test]
    async fn home_returns_html_with_hostname() {
        let response = get_response(test_app("ip-10-0-1-42"), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = body_string(response).await;
        assert!(body.contains("ip-10-0-1-42"));
        assert!(body.contains("AWS CI/CD Pipeline Demo"));
        assert!(body.contains("Running"));
        assert!(body.contains("GitHub Actions + Terraform"));
    }

    #[tokio::test]
    async fn home_sets_cache_control_header() {
        let response = get_response(test_app("test-host"), "/").await;
        assert_eq!(
            response.headers()[CACHE_CONTROL],
            HeaderValue::from_static(CACHE_CONTROL_HOME)
        );
    }

    #[tokio::test]
    async fn health_has_no_cache_control_header() {
        let response = get_response(test_app("test-host"), "/health").await;
        assert!(response.headers().get(CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn unmatched_path_returns_404() {
        let response = get_response(test_app("test-host"), "/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_returns_405() {
        let app = test_app("test-host");
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn repeated_home_requests_are_identical() {
        let app = test_app("test-host");
        let first = body_string(get_response(app.clone(), "/").await).await;
        let second = body_string(get_response(app, "/").await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn concurrent_health_requests_are_independent() {
        let app = test_app("test-host");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move {
                    let response = get_response(app, "/health").await;
                    assert_eq!(response.status(), StatusCode::OK);
                    let body: serde_json::Value =
                        serde_json::from_str(&body_string(response).await).unwrap();
                    assert_eq!(body["status"], "healthy");
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
