//! Price Resolver Service
//!
//! Resolves current prices for a symbol set through the quote source
//! port. Fails soft: any source failure is absorbed locally by pricing
//! the full request from the injected fallback table, so callers always
//! receive a usable map.
//!
//! A returned map carries no provenance - a fallback price is
//! indistinguishable from a live one. Consumers that must not act on
//! reference data need a different surface than this resolver offers.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::application::ports::QuoteSourcePort;
use crate::domain::pricing::{FallbackPrices, PriceMap};
use crate::domain::shared::Symbol;

/// Batched price resolution over the quote source port.
pub struct PriceResolver {
    source: Arc<dyn QuoteSourcePort>,
    fallback: FallbackPrices,
}

impl PriceResolver {
    /// Create a resolver over a quote source and a fallback table.
    #[must_use]
    pub fn new(source: Arc<dyn QuoteSourcePort>, fallback: FallbackPrices) -> Self {
        Self { source, fallback }
    }

    /// Resolve current prices for the given symbols.
    ///
    /// The request is normalized first: empty symbols are dropped and
    /// duplicates collapse, so the source sees each symbol once. An empty
    /// normalized set short-circuits to an empty map without touching the
    /// source.
    ///
    /// On success the map holds exactly the rows the source returned;
    /// requested symbols missing from the response stay absent. On any
    /// source failure the whole request is priced from the fallback
    /// table instead, covering every requested symbol. Primary and
    /// fallback results are never mixed.
    pub async fn resolve_prices(&self, symbols: &[Symbol]) -> PriceMap {
        let unique = normalize_request(symbols);
        if unique.is_empty() {
            return PriceMap::new();
        }

        match self.source.get_quotes(&unique).await {
            Ok(quotes) => quotes
                .into_iter()
                .filter(|quote| !quote.price.is_sign_negative())
                .map(|quote| (quote.symbol, quote.price))
                .collect(),
            Err(error) => {
                warn!(
                    error = %error,
                    symbols = unique.len(),
                    "quote source unavailable, serving fallback prices"
                );
                self.fallback.price_map_for(&unique)
            }
        }
    }
}

impl fmt::Debug for PriceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceResolver")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Deduplicate and drop empty symbols, in sorted order.
///
/// Sorting keeps one symbol set mapping to one request shape.
fn normalize_request(symbols: &[Symbol]) -> Vec<Symbol> {
    symbols
        .iter()
        .filter(|symbol| !symbol.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
