//! Shared application state for request handlers.

use std::io;
use std::sync::Arc;

use crate::error::StartupError;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the hostname resolved once at startup. It is read-only for the
/// process lifetime, so handlers need no synchronization around it.
#[derive(Clone)]
pub struct AppState {
    pub hostname: Arc<String>,
}

impl AppState {
    /// Creates a new application state from the resolved hostname.
    pub fn new(hostname: String) -> Self {
        Self {
            hostname: Arc::new(hostname),
        }
    }
}

/// Resolve the local hostname from the operating system.
///
/// A hostname the OS reports but that is not valid UTF-8 is treated the same
/// as a resolution failure: fatal at startup.
pub fn resolve_hostname() -> Result<String, StartupError> {
    let raw = hostname::get().map_err(StartupError::Hostname)?;
    raw.into_string().map_err(|raw| {
        StartupError::Hostname(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("hostname is not valid UTF-8: {:?}", raw),
        ))
    })
}
