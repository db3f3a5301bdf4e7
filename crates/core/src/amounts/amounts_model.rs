use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::amounts::decode::{decode_field, parse_decimals};
use crate::constants::MAX_SUPPORTED_DECIMALS;
use crate::errors::{Result, ValidationError};

/// An on-chain integer quantity paired with the decimals exponent that
/// defines its display value: `value = raw / 10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledAmount {
    raw: Decimal,
    decimals: u32,
}

impl ScaledAmount {
    pub fn new(raw: Decimal, decimals: u32) -> Result<Self> {
        if decimals > MAX_SUPPORTED_DECIMALS {
            return Err(ValidationError::UnsupportedDecimals(decimals).into());
        }
        Ok(Self { raw, decimals })
    }

    /// Parses a raw integer string with an optional decimals field,
    /// applying the default-18 rule when the count is absent.
    pub fn parse(raw: Option<&str>, decimals: Option<&str>, field: &str) -> Result<Self> {
        let decimals = parse_decimals(decimals);
        // decode_field validates the string; keep the raw integer form
        let value = decode_field(raw, 0, field)?;
        Ok(Self {
            raw: value,
            decimals,
        })
    }

    pub fn raw(&self) -> Decimal {
        self.raw
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The display-scale value, `raw / 10^decimals`.
    pub fn value(&self) -> Decimal {
        (self.raw / Decimal::TEN.powi(i64::from(self.decimals))).normalize()
    }

    /// Display-precision float, for the formatting boundary only.
    pub fn display(&self) -> f64 {
        self.value().to_f64().unwrap_or_default()
    }
}
