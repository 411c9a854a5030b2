//! Infrastructure Layer
//!
//! Adapters and external integrations:
//!
//! - `config`: Environment-variable configuration
//! - `quote_source`: HTTP adapter for the quote source port
//! - `telemetry`: Tracing subscriber initialization

pub mod config;
pub mod quote_source;
pub mod telemetry;
