//! Quote Source Port (Driven Port)
//!
//! Interface to the external market quote source. The price resolver
//! depends on this abstraction; the concrete transport lives in an
//! infrastructure adapter.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

/// One quoted price as returned by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Last quoted price.
    pub price: Decimal,
}

/// Quote source error.
///
/// The resolver treats every variant as one failure category and falls
/// back to deterministic pricing; the split exists for logging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QuoteSourceError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("quote source connection error: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// The source answered with a non-success status.
    #[error("quote source request failed with status {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("malformed quote response: {message}")]
    MalformedResponse {
        /// Decode error details.
        message: String,
    },
}

/// Port for fetching current quotes.
#[async_trait]
pub trait QuoteSourcePort: Send + Sync {
    /// Fetch the latest quotes for the given symbols in one batched call.
    ///
    /// Symbols the source does not recognize may simply be missing from
    /// the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the batch request fails as a whole.
    async fn get_quotes(&self, symbols: &[Symbol]) -> Result<Vec<Quote>, QuoteSourceError>;
}
