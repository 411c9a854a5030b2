//! Configuration Module
//!
//! Configuration loading for the resolution engine.

mod settings;

pub use settings::{ConfigError, QuoteSourceSettings, ResolverConfig};
