//! Guarded mutations
//!
//! Each method calls [`Collection::ensure_mutable`] before any write, so a
//! rejected call leaves the collection exactly as it was. Integer keys behave
//! like an ordered hash map with auto-increment: `push` appends at the next
//! free index, and `shift`, `unshift`, `merge` and `splice` renumber integer
//! keys from zero while string keys keep their names.

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::key::Key;
use crate::ops::window;
use indexmap::IndexMap;
use std::cmp::Ordering;

impl<V> Collection<V> {
    /// Append at the next free integer key
    ///
    /// # Errors
    /// - [`CollectionError::ReadOnly`] on a frozen collection
    /// - [`CollectionError::Overflow`] when the integer key space is exhausted
    pub fn push(&mut self, value: V) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("push")?;
        let index = self.next_index;
        if self.items.contains_key(&Key::Int(index)) {
            return Err(CollectionError::Overflow("push"));
        }
        self.items.insert(Key::Int(index), value);
        self.next_index = index.saturating_add(1);
        Ok(self)
    }

    /// Push only when `predicate` accepts the value
    ///
    /// # Errors
    /// Same as [`Collection::push`]; the guard runs before the predicate
    pub fn push_if(&mut self, value: V, predicate: impl FnOnce(&V) -> bool) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("push_if")?;
        if predicate(&value) {
            self.push(value)?;
        }
        Ok(self)
    }

    /// Remove and return the last value
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn pop(&mut self) -> Result<Option<V>, CollectionError> {
        self.ensure_mutable("pop")?;
        let Some((key, value)) = self.items.pop() else {
            return Ok(None);
        };
        if key.as_int().is_some_and(|index| index.checked_add(1) == Some(self.next_index)) {
            self.next_index -= 1;
        }
        Ok(Some(value))
    }

    /// Remove and return the first value, renumbering integer keys
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn shift(&mut self) -> Result<Option<V>, CollectionError> {
        self.ensure_mutable("shift")?;
        let removed = self.items.shift_remove_index(0).map(|(_, value)| value);
        self.renumber(std::iter::empty());
        Ok(removed)
    }

    /// Prepend a value, renumbering integer keys
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn unshift(&mut self, value: V) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("unshift")?;
        self.renumber(std::iter::once((Key::Int(0), value)));
        Ok(self)
    }

    /// Insert or overwrite; an existing key keeps its position
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn set(&mut self, key: impl Into<Key>, value: V) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("set")?;
        self.insert_entry(key.into(), value);
        Ok(self)
    }

    /// Set only when `predicate` accepts the current value under `key`
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn set_if(
        &mut self,
        key: impl Into<Key>,
        value: V,
        predicate: impl FnOnce(Option<&V>) -> bool,
    ) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("set_if")?;
        let key = key.into();
        if predicate(self.items.get(&key)) {
            self.insert_entry(key, value);
        }
        Ok(self)
    }

    /// Remove every listed key, keeping the order of the rest
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn remove<K: Into<Key>>(&mut self, keys: impl IntoIterator<Item = K>) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("remove")?;
        for key in keys {
            self.items.shift_remove(&key.into());
        }
        Ok(self)
    }

    /// Remove one key and return its value
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn pull(&mut self, key: impl Into<Key>) -> Result<Option<V>, CollectionError> {
        self.ensure_mutable("pull")?;
        Ok(self.items.shift_remove(&key.into()))
    }

    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn clear(&mut self) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("clear")?;
        self.items.clear();
        self.next_index = 0;
        Ok(self)
    }

    /// Append `other`: integer keys are renumbered, string keys overwrite
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn merge(&mut self, other: impl Into<Self>) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("merge")?;
        let other = other.into();
        self.renumber_with(other.items);
        Ok(self)
    }

    /// Add entries of `other` whose keys are absent; existing keys win
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn union(&mut self, other: impl Into<Self>) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("union")?;
        for (key, value) in other.into().items {
            if !self.items.contains_key(&key) {
                self.insert_entry(key, value);
            }
        }
        Ok(self)
    }

    /// Replace a window with `replacement` and return the removed values
    ///
    /// `offset` counts from the end when negative; `None` removes through the
    /// end. Integer keys are renumbered afterwards.
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn splice(
        &mut self,
        offset: i64,
        length: Option<usize>,
        replacement: impl IntoIterator<Item = V>,
    ) -> Result<Self, CollectionError> {
        self.ensure_mutable("splice")?;
        let (start, end) = window(self.items.len(), offset, length);

        let mut entries: Vec<(Key, V)> = std::mem::take(&mut self.items).into_iter().collect();
        let tail = entries.split_off(end);
        let removed = entries.split_off(start);

        let inserted = replacement.into_iter().map(|value| (Key::Int(0), value));
        let (items, next_index) = renumbered(entries.into_iter().chain(inserted).chain(tail));
        self.items = items;
        self.next_index = next_index;

        Ok(Self::from_values(removed.into_iter().map(|(_, value)| value)))
    }

    /// Stable in-place sort by value; keys follow their values
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn sort_by(&mut self, mut compare: impl FnMut(&V, &V) -> Ordering) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("sort_by")?;
        self.items.sort_by(|_, a, _, b| compare(a, b));
        Ok(self)
    }

    /// Sort by key: integers ascending, then strings
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn sort_keys(&mut self) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("sort_keys")?;
        self.items.sort_keys();
        Ok(self)
    }

    /// Rewrite every value in place
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn transform(&mut self, mut f: impl FnMut(&Key, &mut V)) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("transform")?;
        for (key, value) in &mut self.items {
            f(key, value);
        }
        Ok(self)
    }

    /// Keep only entries accepted by `keep`
    ///
    /// # Errors
    /// [`CollectionError::ReadOnly`] on a frozen collection
    pub fn retain(&mut self, mut keep: impl FnMut(&Key, &V) -> bool) -> Result<&mut Self, CollectionError> {
        self.ensure_mutable("retain")?;
        self.items.retain(|key, value| keep(key, value));
        Ok(self)
    }

    fn insert_entry(&mut self, key: Key, value: V) {
        if let Key::Int(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        self.items.insert(key, value);
    }

    fn renumber(&mut self, front: impl Iterator<Item = (Key, V)>) {
        let rest = std::mem::take(&mut self.items);
        let (items, next_index) = renumbered(front.chain(rest));
        self.items = items;
        self.next_index = next_index;
    }

    fn renumber_with(&mut self, back: IndexMap<Key, V>) {
        let front = std::mem::take(&mut self.items);
        let (items, next_index) = renumbered(front.into_iter().chain(back));
        self.items = items;
        self.next_index = next_index;
    }
}

/// Reassign integer keys `0..` in order; a repeated string key keeps its
/// first position and last value
fn renumbered<V>(entries: impl Iterator<Item = (Key, V)>) -> (IndexMap<Key, V>, i64) {
    let mut next = 0_i64;
    let mut items = IndexMap::new();
    for (key, value) in entries {
        let key = match key {
            Key::Int(_) => {
                let key = Key::Int(next);
                next += 1;
                key
            }
            named @ Key::Str(_) => named,
        };
        items.insert(key, value);
    }
    (items, next)
}
