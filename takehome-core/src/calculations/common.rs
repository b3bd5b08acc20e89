//! Shared rounding and conversion rules.
//!
//! Every dollar and rate figure in a result is rounded here, always from its
//! own unrounded value. Rounding is half-up (away from zero), the convention
//! the rest of the pipeline assumes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal amount to whole dollars using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(5862.5)), dec!(5863));
/// assert_eq!(round_to_dollar(dec!(5862.49)), dec!(5862));
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to one decimal place using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_to_tenth;
///
/// assert_eq!(round_to_tenth(dec!(29.65)), dec!(29.7));
/// assert_eq!(round_to_tenth(dec!(29.64)), dec!(29.6));
/// ```
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole dollars and converts to `i64`.
///
/// Saturates at the `i64` range for amounts no realistic income produces,
/// keeping the conversion total with no panic path.
pub fn whole_dollars(value: Decimal) -> i64 {
    let rounded = round_to_dollar(value);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Converts a decimal fraction to a percentage with one decimal place.
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::percent_1dp;
///
/// assert_eq!(percent_1dp(dec!(0.0765)), 7.7);
/// assert_eq!(percent_1dp(dec!(0.22)), 22.0);
/// ```
pub fn percent_1dp(fraction: Decimal) -> f64 {
    round_to_tenth(fraction * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_dollar tests
    // =========================================================================

    #[test]
    fn round_to_dollar_rounds_down_below_midpoint() {
        assert_eq!(round_to_dollar(dec!(100.49)), dec!(100));
    }

    #[test]
    fn round_to_dollar_rounds_up_at_midpoint() {
        assert_eq!(round_to_dollar(dec!(100.5)), dec!(101));
    }

    #[test]
    fn round_to_dollar_preserves_whole_amounts() {
        assert_eq!(round_to_dollar(dec!(100)), dec!(100));
    }

    #[test]
    fn round_to_dollar_handles_zero() {
        assert_eq!(round_to_dollar(dec!(0)), dec!(0));
    }

    // =========================================================================
    // round_to_tenth tests
    // =========================================================================

    #[test]
    fn round_to_tenth_rounds_up_at_midpoint() {
        assert_eq!(round_to_tenth(dec!(7.65)), dec!(7.7));
    }

    #[test]
    fn round_to_tenth_rounds_down_below_midpoint() {
        assert_eq!(round_to_tenth(dec!(7.64)), dec!(7.6));
    }

    #[test]
    fn round_to_tenth_preserves_one_decimal_values() {
        assert_eq!(round_to_tenth(dec!(22.0)), dec!(22.0));
    }

    // =========================================================================
    // whole_dollars tests
    // =========================================================================

    #[test]
    fn whole_dollars_rounds_and_converts() {
        assert_eq!(whole_dollars(dec!(70349.50)), 70350);
        assert_eq!(whole_dollars(dec!(70349.49)), 70349);
    }

    #[test]
    fn whole_dollars_saturates_at_i64_max() {
        let huge = Decimal::MAX;

        assert_eq!(whole_dollars(huge), i64::MAX);
    }

    #[test]
    fn whole_dollars_saturates_at_i64_min() {
        let huge_negative = Decimal::MIN;

        assert_eq!(whole_dollars(huge_negative), i64::MIN);
    }

    // =========================================================================
    // percent_1dp tests
    // =========================================================================

    #[test]
    fn percent_1dp_converts_fraction_to_percentage() {
        assert_eq!(percent_1dp(dec!(0.2965)), 29.7);
    }

    #[test]
    fn percent_1dp_is_exact_for_bracket_rates() {
        assert_eq!(percent_1dp(dec!(0.10)), 10.0);
        assert_eq!(percent_1dp(dec!(0.37)), 37.0);
    }

    #[test]
    fn percent_1dp_handles_zero() {
        assert_eq!(percent_1dp(dec!(0)), 0.0);
    }
}
