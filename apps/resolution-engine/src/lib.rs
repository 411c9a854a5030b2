#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Resolution Engine - Strategy Builder Core
//!
//! The derive/resolve layer behind the strategy canvas. Given a strategy's
//! pipeline graph and recorded transactions, it surfaces every
//! user-configurable filter input with a stable positional identity and
//! keeps a current price map for the instruments the strategy touches,
//! falling back to deterministic reference prices when the quote source
//! is unreachable.
//!
//! # Layers (inside -> outside)
//!
//! - **Domain**: Pure strategy types and derivation logic
//!   - `pipeline`: Graph types and input extraction
//!   - `transaction`: Recorded trades and symbol derivation
//!   - `pricing`: Price maps and the fallback table
//!   - `shared`: Value objects
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Interface to the external quote source
//!   - `services`: Price resolution, subscription coordination
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `quote_source`: HTTP client for the quote service
//!   - `config`: Environment configuration
//!   - `telemetry`: Tracing setup
//!
//! # Data Flow
//!
//! ```text
//! PipelineGraph ──► extract_inputs ──► [PipelineInputDef]
//!
//! [Transaction] ──► derive_symbols ──► {Symbol} ──► PriceSubscriptionController
//!                                                     │ generation-stamped pass
//!                                                     ▼
//!                                              PriceResolver ──► quote source
//!                                                     │            │ on failure
//!                                                     ▼            ▼
//!                                                 PriceMap ◄── FallbackPrices
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Pure strategy types with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::pipeline::{
    Condition, ConditionValueType, NodeKind, PipelineGraph, PipelineInputDef, PipelineNode,
    extract_inputs,
};
pub use domain::pricing::{FallbackPrices, PriceMap};
pub use domain::shared::Symbol;
pub use domain::transaction::{
    OptionDetails, OptionRight, TradeSide, Transaction, derive_symbols,
};

// Application ports and services
pub use application::ports::{Quote, QuoteSourceError, QuoteSourcePort};
pub use application::services::{PriceResolver, PriceSubscriptionController};

// Infrastructure config and adapters
pub use infrastructure::config::{ConfigError, QuoteSourceSettings, ResolverConfig};
pub use infrastructure::quote_source::HttpQuoteSource;
