//! Startup error types.
//!
//! The only failures this service can hit are at startup: binding the
//! listener and resolving the hostname. Both are fatal; the process exits
//! non-zero so deployment tooling can detect a failed rollout. Request
//! handlers are infallible and need no error type.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to bind port {port}: {source}")]
    Bind { port: u16, source: io::Error },

    #[error("Failed to resolve hostname: {0}")]
    Hostname(io::Error),
}
