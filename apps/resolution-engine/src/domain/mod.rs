//! Domain Layer
//!
//! Pure strategy-builder types and derivation logic with no I/O:
//!
//! - `shared`: Value objects used across the crate
//! - `pipeline`: Pipeline graph types and input extraction
//! - `transaction`: Recorded transactions and symbol derivation
//! - `pricing`: Price maps and the deterministic fallback table

pub mod pipeline;
pub mod pricing;
pub mod shared;
pub mod transaction;
