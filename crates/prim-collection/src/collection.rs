//! Ordered collection with a read-only mutation guard
//!
//! A [`Collection`] is an insertion-ordered map from [`Key`] to values with a
//! mode flag. Freezing and thawing never flip the flag in place: both
//! [`Collection::as_read_only`] and [`Collection::to_mutable`] allocate a new
//! instance over a copy of the entries, so a caller holding the original keeps
//! its mode.
//!
//! Every mutating method calls [`Collection::ensure_mutable`] before touching
//! the backing map.

use crate::error::CollectionError;
use crate::key::Key;
use indexmap::IndexMap;
use prim_core::BoolEnum;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Mutable,
    ReadOnly,
}

/// Insertion-ordered map of integer and string keys
///
/// `Clone` preserves the mode; equality compares entries in order and
/// ignores the mode.
#[derive(Debug, Clone)]
pub struct Collection<V> {
    pub(crate) items: IndexMap<Key, V>,
    /// Next free integer key, used by `push`
    pub(crate) next_index: i64,
    pub(crate) mode: Mode,
}

impl<V> Collection<V> {
    /// Create an empty mutable collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(IndexMap::new())
    }

    /// Build a collection from anything convertible into one
    ///
    /// An existing collection passes through unchanged, including its mode.
    /// Lists, arrays and maps produce a new mutable collection.
    #[inline]
    #[must_use]
    pub fn of(input: impl Into<Self>) -> Self {
        input.into()
    }

    /// Build a mutable collection from key/value pairs
    ///
    /// A repeated key keeps its first position and its last value.
    #[must_use]
    pub fn from_pairs<K: Into<Key>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::from_map(pairs.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }

    /// Single-element list
    #[must_use]
    pub fn wrap(value: V) -> Self {
        Self::from_map(IndexMap::from([(Key::Int(0), value)]))
    }

    pub(crate) fn from_map(items: IndexMap<Key, V>) -> Self {
        let next_index = next_free_index(&items);
        Self {
            items,
            next_index,
            mode: Mode::Mutable,
        }
    }

    pub(crate) fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        let items: IndexMap<Key, V> = values
            .into_iter()
            .zip(0_i64..)
            .map(|(value, index)| (Key::Int(index), value))
            .collect();
        Self::from_map(items)
    }

    /// Check if mutations are rejected
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> BoolEnum {
        BoolEnum::from_bool(self.mode == Mode::ReadOnly)
    }

    /// Reject `operation` when the collection is read-only
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] naming the rejected operation
    pub fn ensure_mutable(&self, operation: &'static str) -> Result<(), CollectionError> {
        if self.mode == Mode::ReadOnly {
            tracing::debug!(operation, len = self.items.len(), "rejected mutation of read-only collection");
            return Err(CollectionError::ReadOnly { operation });
        }
        Ok(())
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`Collection::len`]
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same as [`Collection::is_empty`] as a [`BoolEnum`]
    /// Check if `key` is present
    #[inline]
    #[must_use]
    pub fn has_no_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.items.is_empty())
    }

    /// Check for exactly one entry
    #[inline]
    #[must_use]
    pub fn has_one_element(&self) -> BoolEnum {
        BoolEnum::from_bool(self.items.len() == 1)
    }

    /// Check for more than one entry
    #[inline]
    #[must_use]
    pub fn has_several_elements(&self) -> BoolEnum {
        BoolEnum::from_bool(self.items.len() > 1)
    }

    /// Check for one entry or more
    #[inline]
    #[must_use]
    pub fn at_least_one_element(&self) -> BoolEnum {
        BoolEnum::from_bool(!self.items.is_empty())
    }

    /// Check for exactly `count` entries
    #[inline]
    #[must_use]
    pub fn has_x_elements(&self, count: usize) -> BoolEnum {
        BoolEnum::from_bool(self.items.len() == count)
    }

    #[must_use]
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Value at `key`
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.items.get(&key.into())
    }

    /// Value of the first entry
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.items.first().map(|(_, value)| value)
    }

    /// Value of the last entry
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.items.last().map(|(_, value)| value)
    }

    /// Key of the first entry
    #[must_use]
    pub fn first_key(&self) -> Option<&Key> {
        self.items.first().map(|(key, _)| key)
    }

    /// Key of the last entry
    #[must_use]
    pub fn last_key(&self) -> Option<&Key> {
        self.items.last().map(|(key, _)| key)
    }

    /// Keys in order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.items.keys()
    }

    /// Values in order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.items.values()
    }

    /// Entries in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, V> {
        self.items.iter()
    }

    /// Check if the keys are exactly `0..len` in order
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .zip(0_i64..)
            .all(|(key, index)| *key == Key::Int(index))
    }

    /// Borrow the backing map
    #[inline]
    #[must_use]
    pub fn all(&self) -> &IndexMap<Key, V> {
        &self.items
    }

    /// Unwrap into the underlying ordered map
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> IndexMap<Key, V> {
        self.items
    }
}

impl<V: Clone> Collection<V> {
    /// Build a collection and freeze a copy of it
    #[must_use]
    pub fn read_only(input: impl Into<Self>) -> Self {
        Self::of(input).as_read_only()
    }

    /// Frozen copy; the receiver keeps its mode
    #[must_use]
    pub fn as_read_only(&self) -> Self {
        tracing::trace!(len = self.items.len(), "freezing collection copy");
        Self {
            items: self.items.clone(),
            next_index: self.next_index,
            mode: Mode::ReadOnly,
        }
    }

    /// Mutable copy; the only way to mutate data held by a frozen collection
    #[must_use]
    pub fn to_mutable(&self) -> Self {
        tracing::trace!(len = self.items.len(), "thawing collection copy");
        Self {
            items: self.items.clone(),
            next_index: self.next_index,
            mode: Mode::Mutable,
        }
    }

    /// Values in order, keys dropped
    #[must_use]
    pub fn to_vec(&self) -> Vec<V> {
        self.items.values().cloned().collect()
    }
}

impl<V: Serialize> Collection<V> {
    /// JSON array for lists, JSON object otherwise
    ///
    /// # Errors
    /// [`CollectionError::Serialization`] when a value fails to serialize
    pub fn to_json(&self) -> Result<String, CollectionError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn next_free_index<V>(items: &IndexMap<Key, V>) -> i64 {
    items
        .keys()
        .filter_map(Key::as_int)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V> From<IndexMap<Key, V>> for Collection<V> {
    fn from(items: IndexMap<Key, V>) -> Self {
        Self::from_map(items)
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for value in self.items.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.items.len()))?;
            for (key, value) in &self.items {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}
