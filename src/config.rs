//! Application constants.
//!
//! The listen port is intentionally fixed in source: the deployment pipeline
//! this service validates provisions the instance around port 3000, and a
//! configuration surface would only obscure the startup/failure signal the
//! pipeline depends on.

use const_format::formatcp;

/// TCP port the server listens on. Not configurable.
pub const LISTEN_PORT: u16 = 3000;

/// Default tracing filter when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "pipeline_demo=info,tower_http=info";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The status page is static for the lifetime of the process, so upstream
// caches may hold it briefly. Values are in seconds.

/// Status page - content only changes when the instance is replaced
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

// Pre-formatted Cache-Control header value (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR
);
