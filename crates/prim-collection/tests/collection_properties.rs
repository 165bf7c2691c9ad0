//! Property tests for collection operations.

use prim_collection::{Collection, Key};
use prim_core::Numeric;
use proptest::prelude::*;

proptest! {
    /// Pushing onto a list keeps it a list and grows it by one.
    #[test]
    fn push_keeps_lists_indexed(values in proptest::collection::vec(any::<i32>(), 0..32), extra in any::<i32>()) {
        let mut collection = Collection::of(values.clone());
        collection.push(extra).unwrap();

        prop_assert_eq!(collection.len(), values.len() + 1);
        prop_assert!(collection.is_list());
        prop_assert_eq!(collection.last(), Some(&extra));
    }

    /// No mutation ever changes a frozen collection.
    #[test]
    fn frozen_collection_never_changes(values in proptest::collection::vec(any::<i64>(), 0..16), key in any::<i64>()) {
        let mut frozen = Collection::read_only(values);
        let before = frozen.clone();

        prop_assert!(frozen.push(1).is_err());
        prop_assert!(frozen.set(key, 1).is_err());
        prop_assert!(frozen.pull(key).is_err());
        prop_assert!(frozen.shift().is_err());
        prop_assert!(frozen.sort_by(Ord::cmp).is_err());
        prop_assert_eq!(frozen, before);
    }

    /// Aggregates over values finer than the precision agree with the elements.
    #[test]
    fn aggregates_agree_with_rounded_elements(inputs in proptest::collection::vec(-1_000.0_f64..1_000.0, 1..24)) {
        let values: Collection<Numeric> = inputs.iter().map(|v| Numeric::of(*v, 2).unwrap()).collect();

        let max = values.max().unwrap();
        let min = values.min().unwrap();
        prop_assert!(values.contains(&max));
        prop_assert!(values.contains(&min));
        prop_assert!(values.every(|_, v| *v <= max && *v >= min));

        let total: i64 = values.values().map(Numeric::int_value).sum();
        prop_assert_eq!(values.sum().unwrap().int_value(), total);
    }

    /// Merging two lists concatenates them.
    #[test]
    fn merge_of_lists_concatenates(
        left in proptest::collection::vec(any::<u8>(), 0..16),
        right in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut merged = Collection::of(left.clone());
        merged.merge(right.clone()).unwrap();

        let expected: Vec<u8> = left.into_iter().chain(right).collect();
        prop_assert_eq!(merged.to_vec(), expected);
        prop_assert!(merged.is_list());
    }

    /// Sum equals the plain integer sum for values that cannot overflow.
    #[test]
    fn sum_matches_integer_sum(values in proptest::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
        let expected: i64 = values.iter().sum();
        let total = Collection::of(values).sum().unwrap();
        prop_assert_eq!(total.int_value(), expected);
    }

    /// Filter and reject split a collection without losing entries.
    #[test]
    fn filter_and_reject_are_complementary(values in proptest::collection::vec(any::<i16>(), 0..32)) {
        let collection = Collection::of(values);
        let kept = collection.filter(|_, v| *v >= 0);
        let dropped = collection.reject(|_, v| *v >= 0);

        prop_assert_eq!(kept.len() + dropped.len(), collection.len());
        prop_assert!(kept.keys().all(|k| collection.has(k)));
    }
}

#[test]
fn splice_with_nothing_removed_inserts() {
    let mut letters = Collection::of(['a', 'd']);
    let removed = letters.splice(1, Some(0), ['b', 'c']).unwrap();

    assert!(removed.is_empty());
    assert_eq!(letters.to_vec(), vec!['a', 'b', 'c', 'd']);
    assert_eq!(letters.last_key(), Some(&Key::Int(3)));
}
