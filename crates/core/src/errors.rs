//! Core error types for the Stak economics calculations.
//!
//! Parse and missing-field failures are returned as `Err` so the caller
//! can render a fallback state. Data-quality findings discovered during
//! aggregation are *not* errors: they travel inside the result as
//! [`Inconsistency`] values so best-effort numbers still reach the UI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the economics core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for snapshot fields and numeric parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{0}' is empty")]
    EmptyField(String),

    #[error("Failed to parse decimal number in field '{field}': {source}")]
    DecimalParse {
        field: String,
        source: rust_decimal::Error,
    },

    #[error("Failed to parse timestamp in field '{field}': {value}")]
    TimestampParse { field: String, value: String },

    #[error("Decimal count {0} exceeds the supported precision of 28")]
    UnsupportedDecimals(u32),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse {
            field: String::from("value"),
            source: err,
        })
    }
}

/// A derived quantity came out economically impossible.
///
/// These indicate upstream accounting bugs in the indexed data. They are
/// surfaced to the caller alongside the computed values rather than
/// thrown, since hiding them behind a clamp would mask the bug.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Inconsistency {
    #[error("remaining cap is negative ({remaining_cap}): total supply exceeds token cap")]
    NegativeRemainingCap { remaining_cap: Decimal },

    #[error("locked tokens are negative ({tokens_locked}): unlocked tokens exceed total supply")]
    NegativeTokensLocked { tokens_locked: Decimal },

    #[error(
        "locked shares are negative ({shares_locked}): unlocked plus vested shares exceed total shares"
    )]
    NegativeSharesLocked { shares_locked: Decimal },
}
