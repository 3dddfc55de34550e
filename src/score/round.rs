// src/score/round.rs
//! Base-10 rounding of final scores.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::consts::MAX_DECIMALS;

/// Round `value` to `decimals` fractional digits.
///
/// The value is taken at its shortest round-trip decimal form and rounded in base 10,
/// so `1.25` rounds to `1.3` at one decimal even though the binary double sits just below.
/// With `decimals == 0` ties go toward +inf (`-2.5 -> -2`); otherwise ties go away from zero.
/// Non-finite values come back unchanged.
pub fn round(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let decimals = decimals.min(MAX_DECIMALS);

    let Ok(dec) = BigDecimal::from_str(&value.to_string()) else {
        return value;
    };

    let rounded = if decimals == 0 && value < 0.0 {
        -(-dec).with_scale_round(0, RoundingMode::HalfDown)
    } else {
        dec.with_scale_round(i64::from(decimals), RoundingMode::HalfUp)
    };

    let out = rounded.to_string().parse::<f64>().unwrap_or(value);
    // no "-0" in the output
    if out == 0.0 { 0.0 } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.25, 1, 1.3)]
    #[case(1.24, 1, 1.2)]
    #[case(1.15, 1, 1.2)]
    #[case(-1.25, 1, -1.3)]
    #[case(2.675, 2, 2.68)]
    #[case(0.1 + 0.2, 1, 0.3)]
    #[case(10.0, 1, 10.0)]
    #[case(123.456789, 4, 123.4568)]
    #[case(1.0 / 3.0, 10, 0.3333333333)]
    fn half_up_at_the_configured_decimal(#[case] v: f64, #[case] d: u32, #[case] want: f64) {
        assert_eq!(round(v, d), want);
    }

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(2.4999, 2.0)]
    #[case(-2.5, -2.0)]
    #[case(-2.6, -3.0)]
    #[case(0.5, 1.0)]
    #[case(1234567.5, 1234568.0)]
    fn zero_decimals_rounds_ties_up(#[case] v: f64, #[case] want: f64) {
        assert_eq!(round(v, 0), want);
    }

    #[test]
    fn zero_decimals_is_always_integral() {
        for v in [0.0, 0.49, 7.77, -3.3, 1e-9, 98765.4321, -0.5, 1e20 + 0.5] {
            let r = round(v, 0);
            assert_eq!(r.fract(), 0.0, "{v} -> {r}");
        }
    }

    #[test]
    fn negative_zero_is_normalised() {
        let r = round(-0.04, 1);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round(f64::NAN, 1).is_nan());
        assert_eq!(round(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round(f64::NEG_INFINITY, 0), f64::NEG_INFINITY);
    }
}
