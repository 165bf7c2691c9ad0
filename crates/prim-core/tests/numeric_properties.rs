//! Algebraic properties of the value types.
//!
//! Each property here is a contract other crates rely on: aggregates rebuild
//! results through `from_int`, and range checks must never answer for a
//! malformed range.

use prim_core::{BoolEnum, Int, Numeric, NumericError, MAX_PRECISION};
use proptest::prelude::*;

fn pow10(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

proptest! {
    /// Scaling agrees with `round(value * 10^precision)` for decimal inputs.
    #[test]
    fn scaling_matches_rounded_product(scaled in -1_000_000_000i64..1_000_000_000, precision in 0u32..=6) {
        let value = scaled as f64 / pow10(precision);
        let numeric = Numeric::of(value, precision).unwrap();

        prop_assert_eq!(numeric.int_value(), scaled);
        prop_assert_eq!(numeric.int_value(), (value * pow10(precision)).round() as i64);
        prop_assert_eq!(numeric.precision(), precision);
    }

    /// `from_int` is the exact left inverse of scaling.
    #[test]
    fn from_int_round_trips(scaled in any::<i64>(), precision in 0u32..=MAX_PRECISION) {
        let numeric = Numeric::from_int(scaled, precision).unwrap();
        prop_assert_eq!(numeric.int_value(), scaled);
    }

    /// Equality is reflexive, strict order is irreflexive.
    #[test]
    fn equality_is_reflexive(value in -1.0e12f64..1.0e12, precision in 0u32..=6) {
        let a = Numeric::of(value, precision).unwrap();

        prop_assert!(a.equal_to(a).unwrap().yes());
        prop_assert!(a.greater_than(a).unwrap().no());
        prop_assert!(a.less_than(a).unwrap().no());
        prop_assert!(a.not_equal_to(a).unwrap().no());
    }

    /// Anything inside an ordered triple lies in the inclusive range.
    #[test]
    fn middle_of_ordered_triple_is_in_range(mut values in proptest::array::uniform3(-1.0e9f64..1.0e9)) {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let [a, b, c] = values.map(|v| Numeric::of(v, 2).unwrap());

        prop_assert!(b.between_or_equal(a, c).unwrap().is_true());
    }

    /// An inverted range is always rejected, whatever the receiver.
    #[test]
    fn inverted_range_is_rejected(receiver in -1000i64..1000, low in -1000i64..1000, gap in 1i64..1000) {
        let numeric = Numeric::of(receiver, 0).unwrap();
        let high = low + gap;

        let inclusive = numeric.between_or_equal(high, low);
        prop_assert!(matches!(inclusive, Err(NumericError::MalformedRange(_))));
        let exclusive = numeric.between(high, low);
        prop_assert!(matches!(exclusive, Err(NumericError::MalformedRange(_))));
    }

    /// Every integer is exactly one of even or odd.
    #[test]
    fn parity_is_exclusive(value in any::<i64>()) {
        let int = Int::new(value);
        prop_assert_ne!(int.is_even(), int.is_odd());
    }

    #[test]
    fn bool_enum_round_trips(value in any::<bool>()) {
        let outcome = BoolEnum::from_bool(value);
        prop_assert_eq!(outcome.as_bool(), value);
        prop_assert_eq!(outcome.as_int(), i64::from(value));
        prop_assert_eq!(outcome.yes(), !outcome.no());
    }
}

#[test]
fn empty_exclusive_range_fails() {
    let five = Numeric::of(5, 2).unwrap();
    assert!(matches!(five.between(3, 3), Err(NumericError::MalformedRange(_))));
}

#[test]
fn guards_compose_with_question_mark() -> anyhow::Result<()> {
    let price = Numeric::of("19.99", 2)?;
    price.greater_than(0)?.throw_if_false("price must be positive")?;

    let failure = price.less_than(10)?.throw_if_false("price must be below ten");
    assert_eq!(failure.unwrap_err().message(), "price must be below ten");
    Ok(())
}
