//! HTTP Quote Source Adapter
//!
//! Implements `QuoteSourcePort` against the quote service's REST API.
//! One batched request per call:
//!
//! ```text
//! GET {base_url}/v1/quotes/latest?symbols=AAPL,MSFT
//! -> {"quotes": [{"symbol": "AAPL", "price": 187.2}, ...]}
//! ```

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Quote, QuoteSourceError, QuoteSourcePort};
use crate::domain::shared::Symbol;
use crate::infrastructure::config::QuoteSourceSettings;

/// Quote source adapter over HTTP.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Response body of the latest-quotes endpoint.
#[derive(Debug, Deserialize)]
struct QuotesResponse {
    #[serde(default)]
    quotes: Vec<Quote>,
}

impl HttpQuoteSource {
    /// Create a new HTTP quote source.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: &QuoteSourceSettings) -> Result<Self, QuoteSourceError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| QuoteSourceError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Fetch latest quotes for the given symbols.
    async fn fetch_latest(&self, symbols: &[Symbol]) -> Result<QuotesResponse, QuoteSourceError> {
        let symbols_param = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/v1/quotes/latest?symbols={symbols_param}", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await.map_err(|e| QuoteSourceError::Network {
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(QuoteSourceError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| QuoteSourceError::MalformedResponse {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl QuoteSourcePort for HttpQuoteSource {
    async fn get_quotes(&self, symbols: &[Symbol]) -> Result<Vec<Quote>, QuoteSourceError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.fetch_latest(symbols).await?.quotes)
    }
}

impl fmt::Debug for HttpQuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpQuoteSource")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}
