//! Queries and derivations
//!
//! Nothing here touches the receiver, so every method works in either mode.
//! Derivations return a new mutable collection; keys are preserved unless
//! the method says otherwise.

use crate::collection::Collection;
use crate::key::Key;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

impl<V> Collection<V> {
    /// First entry matching `predicate`
    #[must_use]
    pub fn find(&self, mut predicate: impl FnMut(&Key, &V) -> bool) -> Option<(&Key, &V)> {
        self.items.iter().find(|(key, value)| predicate(key, value))
    }

    /// Check if every entry matches; true when empty
    #[must_use]
    pub fn every(&self, mut predicate: impl FnMut(&Key, &V) -> bool) -> bool {
        self.items.iter().all(|(key, value)| predicate(key, value))
    }

    /// Check if any entry matches
    #[must_use]
    pub fn some(&self, mut predicate: impl FnMut(&Key, &V) -> bool) -> bool {
        self.items.iter().any(|(key, value)| predicate(key, value))
    }

    /// Fold entries in order
    pub fn reduce<A>(&self, initial: A, mut fold: impl FnMut(A, &Key, &V) -> A) -> A {
        self.items
            .iter()
            .fold(initial, |acc, (key, value)| fold(acc, key, value))
    }

    /// Apply `f` to every value, keeping keys
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(&Key, &V) -> U) -> Collection<U> {
        Collection::from_map(self.items.iter().map(|(key, value)| (key.clone(), f(key, value))).collect())
    }
}

impl<V: PartialEq> Collection<V> {
    /// Check if any value equals `needle`
    #[must_use]
    pub fn contains(&self, needle: &V) -> bool {
        self.items.values().any(|value| value == needle)
    }
}

impl<V: Clone> Collection<V> {
    fn derive(&self, mut keep: impl FnMut(&Key, &V) -> bool) -> Self {
        Self::from_map(
            self.items
                .iter()
                .filter(|(key, value)| keep(key, value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Entries matching `predicate`, keys kept
    #[must_use]
    pub fn filter(&self, predicate: impl FnMut(&Key, &V) -> bool) -> Self {
        self.derive(predicate)
    }

    /// Entries not matching `predicate`, keys kept
    #[must_use]
    pub fn reject(&self, mut predicate: impl FnMut(&Key, &V) -> bool) -> Self {
        self.derive(|key, value| !predicate(key, value))
    }

    /// Split into `(matching, rest)`
    #[must_use]
    pub fn partition(&self, mut predicate: impl FnMut(&Key, &V) -> bool) -> (Self, Self) {
        let mut matching = IndexMap::new();
        let mut rest = IndexMap::new();
        for (key, value) in &self.items {
            let side = if predicate(key, value) { &mut matching } else { &mut rest };
            side.insert(key.clone(), value.clone());
        }
        (Self::from_map(matching), Self::from_map(rest))
    }

    /// Stable sort of a copy by value, keys follow their values
    #[must_use]
    pub fn sorted_by(&self, mut compare: impl FnMut(&V, &V) -> Ordering) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|_, a, _, b| compare(a, b));
        Self::from_map(items)
    }

    /// Entries in reverse order, keys kept
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut items = self.items.clone();
        items.reverse();
        Self::from_map(items)
    }

    /// Entries from `offset` (negative counts from the end), at most `length`
    #[must_use]
    pub fn slice(&self, offset: i64, length: Option<usize>) -> Self {
        let (start, end) = window(self.items.len(), offset, length);
        Self::from_map(
            self.items
                .iter()
                .skip(start)
                .take(end - start)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// First `count` entries
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.slice(0, Some(count))
    }

    /// Entries after the first `count`
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        let offset = i64::try_from(count).unwrap_or(i64::MAX);
        self.slice(offset, None)
    }

    /// Entries whose key is listed
    #[must_use]
    pub fn only<K: Into<Key>>(&self, keys: impl IntoIterator<Item = K>) -> Self {
        let wanted: Vec<Key> = keys.into_iter().map(Into::into).collect();
        self.derive(|key, _| wanted.contains(key))
    }

    /// Entries whose key is not listed
    #[must_use]
    pub fn except<K: Into<Key>>(&self, keys: impl IntoIterator<Item = K>) -> Self {
        let unwanted: Vec<Key> = keys.into_iter().map(Into::into).collect();
        self.derive(|key, _| !unwanted.contains(key))
    }

    /// Entries whose key is absent from `other`
    #[must_use]
    pub fn diff_keys<U>(&self, other: &Collection<U>) -> Self {
        self.derive(|key, _| !other.items.contains_key(key))
    }

    /// Entries whose key is present in `other`
    #[must_use]
    pub fn intersect_keys<U>(&self, other: &Collection<U>) -> Self {
        self.derive(|key, _| other.items.contains_key(key))
    }

    /// Values re-indexed from zero
    #[must_use]
    pub fn values_list(&self) -> Self {
        Self::from_values(self.items.values().cloned())
    }

    /// Consecutive lists of at most `size` values, re-indexed
    #[must_use]
    pub fn chunk(&self, size: NonZeroUsize) -> Collection<Self> {
        let values: Vec<V> = self.items.values().cloned().collect();
        Collection::from_values(values.chunks(size.get()).map(|chunk| Self::from_values(chunk.to_vec())))
    }

    /// Group values under the key returned by `group`, keeping original keys inside each group
    #[must_use]
    pub fn group_by<G: Into<Key>>(&self, mut group: impl FnMut(&Key, &V) -> G) -> Collection<Self> {
        let mut groups: IndexMap<Key, IndexMap<Key, V>> = IndexMap::new();
        for (key, value) in &self.items {
            groups
                .entry(group(key, value).into())
                .or_default()
                .insert(key.clone(), value.clone());
        }
        Collection::from_map(groups.into_iter().map(|(name, items)| (name, Self::from_map(items))).collect())
    }
}

impl<V: Clone + PartialEq> Collection<V> {
    /// First occurrence of each value, keys preserved
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut seen: Vec<&V> = Vec::new();
        let mut items = IndexMap::new();
        for (key, value) in &self.items {
            if !seen.contains(&value) {
                seen.push(value);
                items.insert(key.clone(), value.clone());
            }
        }
        Self::from_map(items)
    }

    /// Entries whose value does not occur in `other`
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        self.derive(|_, value| !other.contains(value))
    }

    /// Entries whose value occurs in `other`
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.derive(|_, value| other.contains(value))
    }
}

/// Resolve an offset/length pair to a clamped `start..end` window
pub(crate) fn window(len: usize, offset: i64, length: Option<usize>) -> (usize, usize) {
    let start = if offset < 0 {
        usize::try_from(offset.unsigned_abs()).map_or(0, |back| len.saturating_sub(back))
    } else {
        usize::try_from(offset).map_or(len, |front| front.min(len))
    };
    let end = length.map_or(len, |length| start.saturating_add(length).min(len));
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters() -> Collection<&'static str> {
        Collection::from_pairs([("a", "x"), ("b", "y"), ("c", "x"), ("d", "z")])
    }

    #[test]
    fn filter_and_reject_keep_keys() {
        let numbers = Collection::of([1, 2, 3, 4]);
        let even = numbers.filter(|_, n| n % 2 == 0);
        assert_eq!(even, Collection::from_pairs([(1, 2), (3, 4)]));

        let odd = numbers.reject(|_, n| n % 2 == 0);
        assert_eq!(odd.values_list(), Collection::of([1, 3]));
    }

    #[test]
    fn derivations_are_mutable_even_from_frozen_source() {
        let frozen = Collection::read_only([3, 1, 2]);
        let sorted = frozen.sorted_by(Ord::cmp);

        assert!(sorted.is_read_only().no());
        assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
        assert_eq!(frozen.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn sorted_by_keeps_keys_with_values() {
        let sorted = Collection::of([30, 10, 20]).sorted_by(Ord::cmp);
        let keys: Vec<_> = sorted.keys().filter_map(Key::as_int).collect();
        assert_eq!(keys, vec![1, 2, 0]);
    }

    #[test]
    fn map_changes_value_type() {
        let lengths = letters().map(|_, s| s.len());
        assert_eq!(lengths.get("d"), Some(&1));
    }

    #[test]
    fn slicing() {
        let numbers = Collection::of([1, 2, 3, 4, 5]);
        assert_eq!(numbers.slice(1, Some(2)).to_vec(), vec![2, 3]);
        assert_eq!(numbers.slice(-2, None).to_vec(), vec![4, 5]);
        assert_eq!(numbers.slice(-10, Some(1)).to_vec(), vec![1]);
        assert!(numbers.slice(9, None).is_empty());
        assert_eq!(numbers.take(2).to_vec(), vec![1, 2]);
        assert_eq!(numbers.skip(3).to_vec(), vec![4, 5]);
        assert_eq!(numbers.skip(3).first_key(), Some(&Key::Int(3)));
    }

    #[test]
    fn key_selection() {
        assert_eq!(letters().only(["a", "d"]).to_vec(), vec!["x", "z"]);
        assert_eq!(letters().except(["a", "d"]).to_vec(), vec!["y", "x"]);

        let other = Collection::from_pairs([("b", 0), ("q", 0)]);
        assert_eq!(letters().intersect_keys(&other).to_vec(), vec!["y"]);
        assert_eq!(letters().diff_keys(&other).len(), 3);
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        let unique = letters().unique();
        let keys: Vec<_> = unique.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["a", "b", "d"]);
    }

    #[test]
    fn value_set_operations() {
        let left = Collection::of([1, 2, 3, 4]);
        let right = Collection::of([2, 4, 6]);
        assert_eq!(left.diff(&right).to_vec(), vec![1, 3]);
        assert_eq!(left.intersect(&right).to_vec(), vec![2, 4]);
    }

    #[test]
    fn partition_splits_in_order() {
        let (small, large) = Collection::of([5, 1, 7, 2]).partition(|_, n| *n < 5);
        assert_eq!(small.to_vec(), vec![1, 2]);
        assert_eq!(large.to_vec(), vec![5, 7]);
    }

    #[test]
    fn chunk_reindexes_each_chunk() {
        let size = NonZeroUsize::new(2).unwrap();
        let chunks = Collection::of([1, 2, 3, 4, 5]).chunk(size);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.get(1), Some(&Collection::of([3, 4])));
        assert_eq!(chunks.last(), Some(&Collection::of([5])));
    }

    #[test]
    fn group_by_keeps_inner_keys() {
        let groups = letters().group_by(|_, value| *value);
        assert_eq!(groups.len(), 3);
        let xs = groups.get("x").unwrap();
        assert_eq!(xs, &Collection::from_pairs([("a", "x"), ("c", "x")]));
    }

    #[test]
    fn predicates_and_folds() {
        let numbers = Collection::of([1, 2, 3]);
        assert!(numbers.contains(&2));
        assert!(numbers.every(|_, n| *n > 0));
        assert!(!numbers.some(|_, n| *n > 3));
        assert_eq!(numbers.find(|_, n| *n > 1), Some((&Key::Int(1), &2)));
        assert_eq!(numbers.reduce(0, |acc, _, n| acc + n), 6);
        assert_eq!(numbers.reversed().to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn window_clamps() {
        assert_eq!(window(5, 0, None), (0, 5));
        assert_eq!(window(5, 4, Some(10)), (4, 5));
        assert_eq!(window(5, -2, Some(1)), (3, 4));
        assert_eq!(window(5, i64::MIN, None), (0, 5));
        assert_eq!(window(0, 3, Some(3)), (0, 0));
    }
}
