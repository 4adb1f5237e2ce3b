//! Pipeline demo: a minimal HTTP service for validating CI/CD deployments.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! local hostname once, sets up the Axum router with the health and status
//! page routes, and starts the HTTP server on a fixed port.

mod config;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{DEFAULT_LOG_FILTER, LISTEN_PORT};
use routes::create_router;
use state::{resolve_hostname, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve the instance hostname once; it is immutable for the process lifetime
    let hostname = resolve_hostname()?;

    // Create application state and router
    let state = AppState::new(hostname.clone());
    let app = create_router(state);

    // Bind the listener; failure here is fatal so deployment tooling sees a
    // clean non-zero exit instead of a half-started process
    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| error::StartupError::Bind {
            port: LISTEN_PORT,
            source,
        })?;

    tracing::info!("App listening on port {}", LISTEN_PORT);
    tracing::info!("Instance: {}", hostname);

    axum::serve(listener, app).await?;

    Ok(())
}
