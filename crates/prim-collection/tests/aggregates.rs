//! End-to-end tests for aggregates.
//!
//! Aggregates always hand back a `Numeric`, rebuilt from exact scaled
//! integer arithmetic rather than from float sums.

use prim_collection::{Collection, CollectionError, NumericCollection};
use prim_core::{Int, Numeric};
use prim_test_utils::{init_tracing, numeric, numeric_list, price_list};
use pretty_assertions::assert_eq;

/// Tenet: five numerics at precision 2 sum to their arithmetic total.
#[test]
fn five_numerics_sum_exactly() {
    init_tracing();
    let values = numeric_list(&["10.10", "20.20", "30.30", "0.05", "39.35"], 2);

    let total = values.sum().unwrap();

    assert_eq!(total, numeric("100.00", 2));
    assert_eq!(total.int_value(), 10_000);
    assert_eq!(total.precision(), 2);
    assert_eq!(total.to_string(), "100.00");
}

/// Tenet: float noise never reaches the total.
#[test]
fn repeated_tenths_do_not_drift() {
    let tenths: Collection<f64> = std::iter::repeat(0.1).take(10).collect();
    let total = tenths.sum().unwrap();

    assert_eq!(total.int_value(), 10);
    assert!(total.equal_to(1).unwrap().yes());
}

/// Inputs finer than the precision are rounded once, and aggregates agree
/// with the rounded element values.
#[test]
fn sum_matches_rounded_elements() {
    let half_cent = Numeric::of(0.005, 2).unwrap();
    let values: Collection<Numeric> = std::iter::repeat(half_cent).take(5).collect();

    let total = values.sum().unwrap();
    let by_value: f64 = values.values().map(Numeric::value).sum();

    assert_eq!(half_cent.value(), 0.01);
    assert_eq!(total.int_value(), 5);
    assert_eq!(total.value(), 0.05);
    assert!((total.value() - by_value).abs() < 1e-12);
}

#[test]
fn max_and_min_return_an_element() {
    let rounded = Numeric::of(1.239, 2).unwrap();
    let whole = Numeric::of(1.0, 2).unwrap();
    let values = Collection::of([rounded, whole]);

    let max = values.max().unwrap();
    assert_eq!(max, rounded);
    assert_eq!(max.value(), rounded.value());
    assert!(values.contains(&max));
    assert!(values.contains(&values.min().unwrap()));
}

#[test]
fn rounded_input_equals_its_written_form() {
    let rounded = Numeric::of(1.239, 2).unwrap();
    let written = Numeric::of("1.24", 2).unwrap();

    assert_eq!(rounded, written);
    assert!(rounded.equal_to(written).unwrap().yes());
    assert_eq!(rounded.to_string(), written.to_string());
    assert_eq!(Collection::of([rounded, written]).unique().len(), 1);
}

#[test]
fn aggregates_over_mixed_value_types() {
    let ints = Collection::of([Int::new(3), Int::new(-7), Int::new(10)]);
    assert_eq!(ints.min().unwrap(), Numeric::of(-7, 0).unwrap());
    assert_eq!(ints.max().unwrap(), Numeric::of(10, 0).unwrap());
    assert_eq!(ints.avg().unwrap(), Numeric::of(2, 0).unwrap());

    let keyed = Collection::from_pairs([("north", 12_i64), ("south", 30)]);
    assert_eq!(keyed.sum().unwrap().int_value(), 42);
}

#[test]
fn price_list_lifecycle() -> anyhow::Result<()> {
    init_tracing();
    let mut prices = price_list(&["19.99", "5.01"]);
    prices.add(numeric("0.50", 2))?;

    assert_eq!(prices.sum()?, numeric("25.50", 2));
    assert_eq!(prices.avg()?, numeric("8.50", 2));

    let mut frozen = prices.as_read_only();
    assert!(matches!(
        frozen.add(numeric("1.00", 2)),
        Err(CollectionError::ReadOnly { .. })
    ));
    assert_eq!(frozen.sum()?, prices.sum()?);
    Ok(())
}

#[test]
fn price_list_rejects_foreign_precision() {
    let result = NumericCollection::as_list([numeric("1.5", 1)], 2);
    assert!(matches!(
        result,
        Err(CollectionError::PrecisionMismatch { expected: 2, found: 1 })
    ));
}
