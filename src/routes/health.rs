//! Health check endpoint for deployment and orchestration tooling.
//!
//! Provides a liveness probe that returns 200 OK with a JSON body while the
//! process is running. Used by load balancers and the CI/CD pipeline's
//! post-deploy smoke check to verify the service is alive.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response body.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// Current UTC time in RFC 3339 with millisecond precision, captured at
    /// request time.
    timestamp: String,
}

/// Health check handler.
///
/// This path cannot fail: the only work is reading the clock.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
