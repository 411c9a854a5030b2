//! Recorded Transactions and Symbol Derivation
//!
//! Transactions are owned by the strategy store and arrive here as
//! immutable inputs. The resolution layer only needs to know which
//! non-derivative instruments a strategy touches; everything else on the
//! record (side, quantity, fill price, execution time) passes through
//! untouched.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

// =============================================================================
// Types
// =============================================================================

/// Direction of a recorded trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Opening or adding to a long position.
    Buy,
    /// Closing or shorting.
    Sell,
}

/// Contract right of an options transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionRight {
    /// Call option.
    Call,
    /// Put option.
    Put,
}

/// Options sub-record of a transaction.
///
/// The store fills these fields progressively while the user edits a
/// trade, so every field is optional. A transaction counts as a
/// derivative only once an expiration is recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDetails {
    /// Contract expiration date.
    #[serde(default)]
    pub expiration: Option<NaiveDate>,
    /// Strike price.
    #[serde(default)]
    pub strike: Option<Decimal>,
    /// Call or put.
    #[serde(default)]
    pub right: Option<OptionRight>,
}

/// One recorded transaction of a strategy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Ticker of the traded instrument.
    #[serde(default)]
    pub instrument_symbol: Option<Symbol>,
    /// Options sub-record; presence of an expiration marks a derivative.
    #[serde(default)]
    pub option: Option<OptionDetails>,
    /// Trade direction.
    #[serde(default)]
    pub side: Option<TradeSide>,
    /// Number of shares or contracts.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Fill price per unit.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Execution timestamp.
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Whether this transaction references an options contract.
    ///
    /// True iff the option sub-record is present and carries an
    /// expiration. Derivatives are excluded from price lookups.
    #[must_use]
    pub fn is_derivative(&self) -> bool {
        self.option
            .as_ref()
            .is_some_and(|option| option.expiration.is_some())
    }
}

// =============================================================================
// Symbol Derivation
// =============================================================================

/// Collect the set of non-derivative instrument symbols a transaction
/// list references.
///
/// Derivatives are excluded, empty symbols are dropped, and duplicates
/// collapse. Pure; set semantics, so iteration order is unspecified.
#[must_use]
pub fn derive_symbols(transactions: &[Transaction]) -> HashSet<Symbol> {
    transactions
        .iter()
        .filter(|transaction| !transaction.is_derivative())
        .filter_map(|transaction| transaction.instrument_symbol.clone())
        .filter(|symbol| !symbol.is_empty())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use test_case::test_case;

    use super::*;

    fn stock_txn(symbol: &str) -> Transaction {
        Transaction {
            id: format!("txn-{symbol}"),
            instrument_symbol: Some(Symbol::new(symbol)),
            ..Transaction::default()
        }
    }

    fn option_txn(symbol: &str, expiration: Option<NaiveDate>) -> Transaction {
        Transaction {
            id: format!("txn-{symbol}"),
            instrument_symbol: Some(Symbol::new(symbol)),
            option: Some(OptionDetails {
                expiration,
                ..OptionDetails::default()
            }),
            ..Transaction::default()
        }
    }

    #[test]
    fn empty_list_derives_empty_set() {
        assert!(derive_symbols(&[]).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let symbols = derive_symbols(&[stock_txn("AAPL"), stock_txn("AAPL"), stock_txn("MSFT")]);
        assert_eq!(symbols.len(), 2);
        assert!(symbols.contains(&Symbol::new("AAPL")));
        assert!(symbols.contains(&Symbol::new("MSFT")));
    }

    #[test]
    fn derivatives_are_excluded() {
        let expiration = NaiveDate::from_ymd_opt(2026, 1, 16);
        let symbols = derive_symbols(&[option_txn("AAPL", expiration), stock_txn("MSFT")]);
        assert_eq!(symbols.len(), 1);
        assert!(symbols.contains(&Symbol::new("MSFT")));
    }

    #[test]
    fn option_record_without_expiration_is_not_a_derivative() {
        let symbols = derive_symbols(&[option_txn("AAPL", None)]);
        assert!(symbols.contains(&Symbol::new("AAPL")));
    }

    #[test]
    fn missing_and_empty_symbols_are_dropped() {
        let no_symbol = Transaction::default();
        let empty_symbol = stock_txn("");
        assert!(derive_symbols(&[no_symbol, empty_symbol]).is_empty());
    }

    #[test_case(None, false; "no option record")]
    #[test_case(Some(OptionDetails::default()), false; "option without expiration")]
    #[test_case(
        Some(OptionDetails {
            expiration: NaiveDate::from_ymd_opt(2026, 6, 19),
            ..OptionDetails::default()
        }),
        true;
        "option with expiration"
    )]
    fn derivative_detection(option: Option<OptionDetails>, expected: bool) {
        let transaction = Transaction {
            option,
            ..Transaction::default()
        };
        assert_eq!(transaction.is_derivative(), expected);
    }

    #[test]
    fn transaction_deserializes_from_store_document() {
        let transaction: Transaction = serde_json::from_str(
            r#"{
                "id": "t1",
                "instrumentSymbol": "aapl",
                "side": "buy",
                "quantity": "100",
                "price": "182.3",
                "option": {"expiration": "2026-01-16", "strike": "185", "right": "call"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            transaction.instrument_symbol,
            Some(Symbol::new("AAPL")),
            "symbols normalize on deserialization"
        );
        assert!(transaction.is_derivative());
        assert_eq!(transaction.side, Some(TradeSide::Buy));
    }
}
