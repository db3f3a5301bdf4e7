//! Stak Core - vesting and position-economics calculations.
//!
//! This crate contains the numeric core shared by the Stak protocol
//! dashboard: fixed-point decoding of on-chain amounts, the time-based
//! vesting evaluator, and the economics aggregators for Flying-ICO
//! offerings and Stak vaults. It is I/O-free and operates on snapshots
//! fetched by an external indexer client.

pub mod amounts;
pub mod constants;
pub mod errors;
pub mod offerings;
pub mod utils;
pub mod vaults;
pub mod vesting;

// Re-export common types from the domain modules
pub use amounts::*;
pub use vesting::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
