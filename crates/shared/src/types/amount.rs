//! Amount arithmetic helpers shared by the statement builders.

use rust_decimal::Decimal;

/// Returns `value / base * 100` rounded to two decimal places, or zero
/// when `base` is zero.
///
/// Every margin and percentage in the reports uses this convention so a
/// zero denominator never panics and never produces a misleading ratio.
#[must_use]
pub fn percent_of(value: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        Decimal::ZERO
    } else {
        (value / base * Decimal::ONE_HUNDRED).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(50), dec!(200)), dec!(25.00));
        assert_eq!(percent_of(dec!(-200), dec!(1000)), dec!(-20.00));
        assert_eq!(percent_of(dec!(1), dec!(3)), dec!(33.33));
    }

    #[test]
    fn test_zero_base_yields_zero() {
        assert_eq!(percent_of(dec!(100), dec!(0)), dec!(0));
    }
}
