//! Rounding modes and decimal scaling
//!
//! Scaling works on the shortest decimal representation of a float rather
//! than on the product `value * 10^precision`, so `1.235` at precision 2
//! sees the tie it was written as instead of `123.49999999999999`.

use crate::error::NumericError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Tie-breaking rule applied when a value lies exactly halfway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero
    #[default]
    HalfUp,
    /// Toward zero
    HalfDown,
    /// Toward the nearest even digit
    HalfEven,
    /// Toward the nearest odd digit
    HalfOdd,
}

impl RoundingMode {
    /// All supported modes
    pub const ALL: [Self; 4] = [Self::HalfUp, Self::HalfDown, Self::HalfEven, Self::HalfOdd];

    /// Snake-case name, as accepted by [`FromStr`]
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfUp => "half_up",
            Self::HalfDown => "half_down",
            Self::HalfEven => "half_even",
            Self::HalfOdd => "half_odd",
        }
    }

    /// Whether a tie on top of quotient `q` rounds away from zero
    fn bumps_tie(self, q: u128) -> bool {
        match self {
            Self::HalfUp => true,
            Self::HalfDown => false,
            Self::HalfEven => q % 2 == 1,
            Self::HalfOdd => q % 2 == 0,
        }
    }
}

/// Legacy integer mode codes: 1 = half up, 2 = half down, 3 = half even, 4 = half odd
impl TryFrom<i32> for RoundingMode {
    type Error = NumericError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::HalfUp),
            2 => Ok(Self::HalfDown),
            3 => Ok(Self::HalfEven),
            4 => Ok(Self::HalfOdd),
            other => Err(NumericError::InvalidRoundingMode(other.to_string())),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| NumericError::InvalidRoundingMode(s.to_string()))
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `|v| == mantissa * 10^exponent`, using the shortest round-trip digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digits {
    pub(crate) mantissa: u64,
    pub(crate) exponent: i32,
}

impl Digits {
    /// Decompose a finite float
    pub(crate) fn of(value: f64) -> Self {
        // `{:e}` renders the shortest digits that round-trip, e.g. `1.235e0`
        let rendered = format!("{:e}", value.abs());
        let (mantissa, exp) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let digits = format!("{int_part}{frac_part}");

        let exp: i32 = exp.parse().unwrap_or(0);
        let frac_len = i32::try_from(frac_part.len()).unwrap_or(0);
        Self {
            mantissa: digits.parse().unwrap_or(0),
            exponent: exp - frac_len,
        }
    }

    /// Number of digits after the decimal point
    pub(crate) fn fraction_len(self) -> u32 {
        if self.mantissa == 0 || self.exponent >= 0 {
            0
        } else {
            self.exponent.unsigned_abs()
        }
    }
}

/// `10^exp` as an integer, `None` past `i64` range
#[inline]
pub(crate) fn pow10_i64(exp: u32) -> Option<i64> {
    10i64.checked_pow(exp)
}

/// `10^exp` as a float
#[inline]
pub(crate) fn pow10_f64(exp: u32) -> f64 {
    10f64.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}

/// Scale `value` by `10^precision` and round to an integer with `mode`
///
/// Returns `None` when the result does not fit an `i64`.
pub(crate) fn scale(value: f64, precision: u32, mode: RoundingMode) -> Option<i64> {
    let digits = Digits::of(value);
    if digits.mantissa == 0 {
        return Some(0);
    }

    let shift = i64::from(digits.exponent) + i64::from(precision);
    let magnitude = u128::from(digits.mantissa);
    let scaled = if shift >= 0 {
        let factor = 10u128.checked_pow(u32::try_from(shift).ok()?)?;
        magnitude.checked_mul(factor)?
    } else {
        let drop = u32::try_from(-shift).ok()?;
        match 10u128.checked_pow(drop) {
            // Everything lies below the rounding position
            None => 0,
            Some(divisor) => {
                let q = magnitude / divisor;
                let r = magnitude % divisor;
                match (r * 2).cmp(&divisor) {
                    Ordering::Less => q,
                    Ordering::Greater => q + 1,
                    Ordering::Equal if mode.bumps_tie(q) => q + 1,
                    Ordering::Equal => q,
                }
            }
        }
    };

    let signed = i128::try_from(scaled).ok()?;
    let signed = if value.is_sign_negative() { -signed } else { signed };
    i64::try_from(signed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_of_decimal_literals() {
        assert_eq!(Digits::of(1.235), Digits { mantissa: 1235, exponent: -3 });
        assert_eq!(Digits::of(-272.03), Digits { mantissa: 27203, exponent: -2 });
        assert_eq!(Digits::of(1500.0), Digits { mantissa: 15, exponent: 2 });
        assert_eq!(Digits::of(0.0).mantissa, 0);
    }

    #[test]
    fn fraction_len() {
        assert_eq!(Digits::of(1.23).fraction_len(), 2);
        assert_eq!(Digits::of(42.0).fraction_len(), 0);
        assert_eq!(Digits::of(0.0).fraction_len(), 0);
    }

    #[test]
    fn scale_sees_written_ties() {
        assert_eq!(scale(1.235, 2, RoundingMode::HalfUp), Some(124));
        assert_eq!(scale(1.235, 2, RoundingMode::HalfDown), Some(123));
        assert_eq!(scale(1.245, 2, RoundingMode::HalfEven), Some(124));
        assert_eq!(scale(1.255, 2, RoundingMode::HalfOdd), Some(125));
        assert_eq!(scale(1.005, 2, RoundingMode::HalfUp), Some(101));
    }

    #[test]
    fn scale_rounds_negative_away_from_zero() {
        assert_eq!(scale(-2.5, 0, RoundingMode::HalfUp), Some(-3));
        assert_eq!(scale(-2.5, 0, RoundingMode::HalfDown), Some(-2));
        assert_eq!(scale(-2.5, 0, RoundingMode::HalfEven), Some(-2));
    }

    #[test]
    fn scale_without_rounding() {
        assert_eq!(scale(123.0, 2, RoundingMode::HalfUp), Some(12_300));
        assert_eq!(scale(1e-30, 2, RoundingMode::HalfUp), Some(0));
    }

    #[test]
    fn scale_overflow() {
        assert_eq!(scale(1e19, 0, RoundingMode::HalfUp), None);
        assert_eq!(scale(1e300, 2, RoundingMode::HalfUp), None);
        assert!(scale(9.0e18, 0, RoundingMode::HalfUp).is_some());
    }

    #[test]
    fn rounding_mode_codes_and_names() {
        assert_eq!(RoundingMode::try_from(1).unwrap(), RoundingMode::HalfUp);
        assert_eq!(RoundingMode::try_from(4).unwrap(), RoundingMode::HalfOdd);
        assert!(matches!(
            RoundingMode::try_from(7),
            Err(NumericError::InvalidRoundingMode(_))
        ));
        assert_eq!("half_even".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
        assert!("ceiling".parse::<RoundingMode>().is_err());
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
