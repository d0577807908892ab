//! Number parsing and formatting for `sum`

use crate::error::{DemoError, Result};

/// Totals closer than this to a whole number print without a fraction
pub const NEAR_INTEGER_TOLERANCE: f64 = 1e-9;

/// Parse a single `sum` operand.
///
/// Every comma becomes a period before parsing, so `1,5` is one and a half
/// and `1,234` is `1.234`. Leading and trailing whitespace or control
/// characters are ignored.
pub fn parse_operand(token: &str) -> Result<f64> {
    let normalized = token.replace(',', ".");
    normalized
        .trim_matches(|c: char| c <= ' ')
        .parse::<f64>()
        .map_err(|_| DemoError::invalid_number(token))
}

/// Add operands left to right, stopping at the first one that does not parse
pub fn accumulate<S: AsRef<str>>(operands: &[S]) -> Result<f64> {
    operands
        .iter()
        .try_fold(0.0, |total, token| -> Result<f64> {
            Ok(total + parse_operand(token.as_ref())?)
        })
}

/// Render a total: integer form when within tolerance of a whole number.
///
/// The comparison is made against the rounded value after it has been
/// clamped to `i64`, so totals outside that range print as floats.
pub fn format_total(total: f64) -> String {
    let rounded = total.round() as i64;
    if (total - rounded as f64).abs() < NEAR_INTEGER_TOLERANCE {
        rounded.to_string()
    } else {
        total.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(parse_operand("3").unwrap(), 3.0);
        assert_eq!(parse_operand("-4.5").unwrap(), -4.5);
        assert_eq!(parse_operand("+2").unwrap(), 2.0);
        assert_eq!(parse_operand("1e3").unwrap(), 1000.0);
        assert_eq!(parse_operand(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_comma_is_decimal_separator() {
        assert_eq!(parse_operand("1,5").unwrap(), 1.5);
        assert_eq!(parse_operand("1,234").unwrap(), 1.234);
    }

    #[test]
    fn test_multiple_commas_are_rejected_with_original_text() {
        let err = parse_operand("1,2,3").unwrap_err();
        assert_eq!(err, DemoError::invalid_number("1,2,3"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_operand(" 7 ").unwrap(), 7.0);
        assert_eq!(parse_operand("\t7\n").unwrap(), 7.0);
        assert_eq!(parse_operand("\u{1}2,5\r").unwrap(), 2.5);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_operand("x").is_err());
        assert!(parse_operand("").is_err());
        assert!(parse_operand("12abc").is_err());
    }

    #[test]
    fn test_accumulate_stops_at_first_bad_operand() {
        let err = accumulate(&["3", "x", "y"]).unwrap_err();
        assert_eq!(err, DemoError::invalid_number("x"));
    }

    #[test]
    fn test_accumulate_sums_in_order() {
        assert_eq!(accumulate(&["3", "4.5", "10"]).unwrap(), 17.5);
    }

    #[test]
    fn test_format_integer_form() {
        assert_eq!(format_total(17.0), "17");
        assert_eq!(format_total(-3.0), "-3");
        assert_eq!(format_total(-0.0), "0");
        assert_eq!(format_total(0.1 + 0.2 + 0.7), "1");
    }

    #[test]
    fn test_format_fractional_form() {
        assert_eq!(format_total(17.5), "17.5");
        assert_eq!(format_total(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_total(1.000_001), "1.000001");
    }

    #[test]
    fn test_tolerance_boundary() {
        assert_eq!(format_total(2.0 + 1e-10), "2");
        assert_ne!(format_total(2.0 + 1e-8), "2");
    }

    #[test]
    fn test_totals_beyond_i64_print_as_floats() {
        assert_eq!(format_total(1e19), "10000000000000000000");
        assert_eq!(format_total(-1e19), "-10000000000000000000");
        assert!(format_total(1e300).starts_with("1000000000"));
        assert_eq!(format_total(1e300).len(), 301);
    }

    #[test]
    fn test_i64_range_edge_stays_integer() {
        assert_eq!(format_total(9.0e18), "9000000000000000000");
        assert_eq!(format_total(-9.0e18), "-9000000000000000000");
    }

    #[test]
    fn test_non_finite_totals() {
        assert_eq!(format_total(f64::NAN), "NaN");
        assert_eq!(format_total(f64::INFINITY), "inf");
    }
}
