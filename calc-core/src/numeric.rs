//! Numeric helpers shared by the engine.
//!
//! This module converts between display text and [`Decimal`] values and
//! applies the rounding rules used for results.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CalculatorError;

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly halfway are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::numeric::round_half_up;
///
/// assert_eq!(round_half_up(dec!(0.333334), 5), dec!(0.33333));
/// assert_eq!(round_half_up(dec!(0.666665), 5), dec!(0.66667));
/// assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value the way results are shown.
///
/// Trailing fractional zeros are dropped and negative zero prints as `0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::numeric::format_result;
///
/// assert_eq!(format_result(dec!(12.000)), "12");
/// assert_eq!(format_result(dec!(-0.50)), "-0.5");
/// ```
pub fn format_result(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Counts the digit characters in a display string.
pub fn count_digits(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Rounds `value` to `max_decimals` places, then drops further decimals
/// until the result shows at most `max_digits` digits.
///
/// # Errors
///
/// Returns [`CalculatorError::Overflow`] when the integer part alone needs
/// more than `max_digits` digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::numeric::fit_to_digits;
///
/// assert_eq!(fit_to_digits(dec!(1234.56789), 5, 6), Ok(dec!(1234.57)));
/// assert!(fit_to_digits(dec!(1234567), 5, 6).is_err());
/// ```
pub fn fit_to_digits(
    value: Decimal,
    max_decimals: u32,
    max_digits: usize,
) -> Result<Decimal, CalculatorError> {
    let mut decimals = max_decimals;
    loop {
        let rounded = round_half_up(value, decimals).normalize();
        let digits = count_digits(&rounded.to_string());
        if digits <= max_digits {
            return Ok(rounded);
        }

        let integer_digits = digits - rounded.scale() as usize;
        if integer_digits > max_digits {
            return Err(CalculatorError::Overflow);
        }
        // Strictly fewer than the current scale, so the loop terminates.
        decimals = (max_digits - integer_digits) as u32;
    }
}

/// Reads display text as a number.
///
/// Accepts an optional leading `-`, at least one leading digit, and at most
/// one `.`, which may be trailing (`"5."` reads as 5).
///
/// # Errors
///
/// Returns [`CalculatorError::MalformedOperand`] for anything else, such as a
/// bare `-` or `.`, empty text, or `"Error"`.
pub fn parse_operand(text: &str) -> Result<Decimal, CalculatorError> {
    let malformed = || CalculatorError::MalformedOperand(text.to_string());

    let body = text.strip_suffix('.').unwrap_or(text);
    let unsigned = body.strip_prefix('-').unwrap_or(body);

    if !unsigned.starts_with(|c: char| c.is_ascii_digit())
        || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        || unsigned.matches('.').count() > 1
    {
        return Err(malformed());
    }

    Decimal::from_str(body).map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(1.234564), 5);

        assert_eq!(result, dec!(1.23456));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(1.234565), 5);

        assert_eq!(result, dec!(1.23457));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-1.234565), 5);

        assert_eq!(result, dec!(-1.23457)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_short_values() {
        let result = round_half_up(dec!(2.5), 5);

        assert_eq!(result, dec!(2.5));
    }

    #[test]
    fn round_half_up_to_zero_places() {
        assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
        assert_eq!(round_half_up(dec!(2.49), 0), dec!(2));
    }

    // =========================================================================
    // format_result tests
    // =========================================================================

    #[test]
    fn format_result_strips_trailing_zeros() {
        assert_eq!(format_result(dec!(7.0)), "7");
        assert_eq!(format_result(dec!(0.50000)), "0.5");
    }

    #[test]
    fn format_result_keeps_significant_decimals() {
        assert_eq!(format_result(dec!(0.33333)), "0.33333");
        assert_eq!(format_result(dec!(-12.125)), "-12.125");
    }

    #[test]
    fn format_result_never_prints_negative_zero() {
        let negative_zero = dec!(-1) * dec!(0);

        assert_eq!(format_result(negative_zero), "0");
    }

    #[test]
    fn format_result_uses_plain_notation_for_large_values() {
        assert_eq!(format_result(dec!(100000000000)), "100000000000");
    }

    // =========================================================================
    // count_digits tests
    // =========================================================================

    #[test]
    fn count_digits_ignores_sign_and_point() {
        assert_eq!(count_digits("-12.345"), 5);
        assert_eq!(count_digits("0."), 1);
        assert_eq!(count_digits("-0"), 1);
        assert_eq!(count_digits("Error"), 0);
    }

    // =========================================================================
    // fit_to_digits tests
    // =========================================================================

    #[test]
    fn fit_to_digits_rounds_to_configured_decimals() {
        let result = fit_to_digits(dec!(1) / dec!(3), 5, 12);

        assert_eq!(result, Ok(dec!(0.33333)));
    }

    #[test]
    fn fit_to_digits_drops_decimals_that_do_not_fit() {
        // 17636684.142857... needs 13 digits at 5 places
        let result = fit_to_digits(dec!(123456789) / dec!(7), 5, 12);

        assert_eq!(result, Ok(dec!(17636684.1429)));
    }

    #[test]
    fn fit_to_digits_handles_carry_into_new_integer_digit() {
        let result = fit_to_digits(dec!(99.96), 5, 3);

        assert_eq!(result, Ok(dec!(100)));
    }

    #[test]
    fn fit_to_digits_rejects_carry_past_limit() {
        let result = fit_to_digits(dec!(99.5), 5, 2);

        assert_eq!(result, Err(CalculatorError::Overflow));
    }

    #[test]
    fn fit_to_digits_rejects_oversized_integer_part() {
        let result = fit_to_digits(dec!(1000000000000), 5, 12);

        assert_eq!(result, Err(CalculatorError::Overflow));
    }

    #[test]
    fn fit_to_digits_accepts_exact_limit() {
        let result = fit_to_digits(dec!(999999999999), 5, 12);

        assert_eq!(result, Ok(dec!(999999999999)));
    }

    // =========================================================================
    // parse_operand tests
    // =========================================================================

    #[test]
    fn parse_operand_reads_display_grammar() {
        assert_eq!(parse_operand("0"), Ok(dec!(0)));
        assert_eq!(parse_operand("42"), Ok(dec!(42)));
        assert_eq!(parse_operand("-7"), Ok(dec!(-7)));
        assert_eq!(parse_operand("3.25"), Ok(dec!(3.25)));
        assert_eq!(parse_operand("-0.5"), Ok(dec!(-0.5)));
    }

    #[test]
    fn parse_operand_accepts_trailing_point() {
        assert_eq!(parse_operand("5."), Ok(dec!(5)));
        assert_eq!(parse_operand("0."), Ok(dec!(0)));
        assert_eq!(parse_operand("-0."), Ok(dec!(0)));
    }

    #[test]
    fn parse_operand_rejects_residual_symbols() {
        for text in ["", "-", ".", "-.", "Error", "1.2.3", "--1", "1-2", ".5"] {
            assert_eq!(
                parse_operand(text),
                Err(CalculatorError::MalformedOperand(text.to_string())),
                "input {text:?}"
            );
        }
    }
}
