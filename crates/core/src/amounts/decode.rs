//! Decoding helpers for the indexer's decimal-string fields.
//!
//! Every monetary field arrives as a base-10 integer string scaled by a
//! per-asset decimal count. Decoding stays in `Decimal` end to end;
//! conversion to display floats happens at the presentation boundary.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::constants::{DEFAULT_TOKEN_DECIMALS, MAX_SUPPORTED_DECIMALS};
use crate::errors::{Result, ValidationError};

/// Decodes a raw integer string into its display-scale decimal value,
/// `raw / 10^decimals`.
///
/// Values whose magnitude exceeds the 28-digit precision of `Decimal`
/// fail with a parse error rather than losing precision silently.
pub fn decode_amount(raw: &str, decimals: u32) -> Result<Decimal> {
    if decimals > MAX_SUPPORTED_DECIMALS {
        return Err(ValidationError::UnsupportedDecimals(decimals).into());
    }
    let raw_value = Decimal::from_str(raw.trim())?;
    Ok((raw_value / Decimal::TEN.powi(i64::from(decimals))).normalize())
}

/// Decodes an optional snapshot field, naming the field in any failure.
///
/// A `None` field is a missing-field error; an empty string is reported
/// separately since the indexer emits `""` for unset values.
pub fn decode_field(value: Option<&str>, decimals: u32, field: &str) -> Result<Decimal> {
    let raw = value.ok_or_else(|| ValidationError::MissingField(field.to_string()))?;
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()).into());
    }
    if decimals > MAX_SUPPORTED_DECIMALS {
        return Err(ValidationError::UnsupportedDecimals(decimals).into());
    }
    let raw_value =
        Decimal::from_str(raw.trim()).map_err(|source| ValidationError::DecimalParse {
            field: field.to_string(),
            source,
        })?;
    Ok((raw_value / Decimal::TEN.powi(i64::from(decimals))).normalize())
}

/// Parses an asset's decimal count, defaulting to 18 when the field is
/// absent or not parseable as an integer.
pub fn parse_decimals(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_TOKEN_DECIMALS)
}

/// Parses a unix-second timestamp field, naming the field in failures.
pub fn parse_timestamp_field(value: Option<&str>, field: &str) -> Result<i64> {
    let raw = value.ok_or_else(|| ValidationError::MissingField(field.to_string()))?;
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()).into());
    }
    raw.trim()
        .parse::<i64>()
        .map_err(|_| {
            ValidationError::TimestampParse {
                field: field.to_string(),
                value: raw.to_string(),
            }
            .into()
        })
}
