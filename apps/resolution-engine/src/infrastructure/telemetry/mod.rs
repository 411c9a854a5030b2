//! Tracing Initialization
//!
//! Configures the tracing subscriber for the binary.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: `info`)
//!
//! # Usage
//!
//! ```ignore
//! use resolution_engine::infrastructure::telemetry;
//!
//! // Initialize once at startup
//! telemetry::init();
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at startup; a second call panics inside `tracing`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
