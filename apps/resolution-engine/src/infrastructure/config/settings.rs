//! Resolver Configuration Settings
//!
//! Configuration types for the resolution engine, loaded from environment
//! variables.

use std::fmt;
use std::time::Duration;

/// Quote source connection settings.
#[derive(Clone)]
pub struct QuoteSourceSettings {
    /// Base URL of the quote source.
    pub base_url: String,
    /// Optional API key, sent as `X-API-Key`.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for QuoteSourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            api_key: None,
            timeout: Duration::from_millis(5_000),
        }
    }
}

impl fmt::Debug for QuoteSourceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteSourceSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Complete resolution engine configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Quote source connection settings.
    pub quote_source: QuoteSourceSettings,
}

impl ResolverConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("QUOTE_SOURCE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("QUOTE_SOURCE_URL".to_string()))?;

        if base_url.is_empty() {
            return Err(ConfigError::EmptyValue("QUOTE_SOURCE_URL".to_string()));
        }

        let api_key = std::env::var("QUOTE_SOURCE_KEY")
            .ok()
            .filter(|value| !value.is_empty());

        let timeout = parse_env_duration_millis(
            "QUOTE_SOURCE_TIMEOUT_MS",
            QuoteSourceSettings::default().timeout,
        );

        Ok(Self {
            quote_source: QuoteSourceSettings {
                base_url,
                api_key,
                timeout,
            },
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_env_duration_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_millis)
}
