//! Presentation-boundary helpers.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Shortens a hex address for display: `0x1234...abcd`.
///
/// Anything too short (or non-ASCII) is returned unchanged.
pub fn format_address(address: &str) -> String {
    if !address.is_ascii() || address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Converts a decimal metric to a display-precision float. This is the
/// only place values leave `Decimal`.
pub fn display_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            format_address("0x52908400098527886e0f7030069857d2e4169ee7"),
            "0x5290...9ee7"
        );
    }

    #[test]
    fn leaves_short_values_alone() {
        assert_eq!(format_address("0x1234"), "0x1234");
    }

    #[test]
    fn converts_to_display_float() {
        assert_eq!(display_value(dec!(1.5)), 1.5);
    }
}
