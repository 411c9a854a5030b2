//! Port Interfaces
//!
//! Interfaces for external systems following the Hexagonal Architecture
//! pattern. These are the contracts that infrastructure adapters must
//! implement.
//!
//! ## Driven Ports (Outbound)
//!
//! - `QuoteSourcePort`: Interface to the external market quote source

mod quote_source_port;

pub use quote_source_port::{Quote, QuoteSourceError, QuoteSourcePort};
