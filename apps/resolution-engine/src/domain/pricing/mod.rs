//! Price Maps and Fallback Pricing
//!
//! A resolution pass produces a fresh [`PriceMap`] that supersedes the
//! previous one; maps are never persisted. When the quote source is
//! unavailable, prices come from an explicit [`FallbackPrices`] table so
//! the outcome stays deterministic and every requested symbol resolves.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::shared::Symbol;

/// Mapping from symbol to a non-negative price.
pub type PriceMap = HashMap<Symbol, Decimal>;

/// Deterministic reference prices used when the quote source fails.
///
/// Injected into the resolver rather than read from a global, so tests
/// and callers can substitute their own table. Recognized symbols map to
/// their reference price; everything else maps to the constant default.
#[derive(Debug, Clone)]
pub struct FallbackPrices {
    reference: HashMap<Symbol, Decimal>,
    default_price: Decimal,
}

impl FallbackPrices {
    /// Create a fallback table from a reference map and a default price.
    #[must_use]
    pub fn new(reference: HashMap<Symbol, Decimal>, default_price: Decimal) -> Self {
        Self {
            reference,
            default_price,
        }
    }

    /// Price for one symbol: the reference entry, or the default.
    #[must_use]
    pub fn price_for(&self, symbol: &Symbol) -> Decimal {
        self.reference
            .get(symbol)
            .copied()
            .unwrap_or(self.default_price)
    }

    /// Build a complete price map for a symbol set.
    ///
    /// Every requested symbol is present in the result.
    #[must_use]
    pub fn price_map_for(&self, symbols: &[Symbol]) -> PriceMap {
        symbols
            .iter()
            .map(|symbol| (symbol.clone(), self.price_for(symbol)))
            .collect()
    }
}

impl Default for FallbackPrices {
    fn default() -> Self {
        let reference = [
            (Symbol::new("AAPL"), dec!(185.5)),
            (Symbol::new("MSFT"), dec!(415.25)),
            (Symbol::new("GOOGL"), dec!(176.40)),
            (Symbol::new("AMZN"), dec!(205.10)),
            (Symbol::new("NVDA"), dec!(132.60)),
            (Symbol::new("TSLA"), dec!(248.75)),
            (Symbol::new("SPY"), dec!(560.00)),
            (Symbol::new("QQQ"), dec!(485.30)),
        ]
        .into_iter()
        .collect();

        Self {
            reference,
            default_price: dec!(100),
        }
    }
}
