//! Collections of numerics at one precision

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::key::Key;
use prim_core::{Numeric, NumericConfig};
use serde::Serialize;

/// [`Collection`] of [`Numeric`] values that all share `precision`
///
/// Aggregates on an empty collection return zero at the collection
/// precision rather than at precision 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NumericCollection {
    inner: Collection<Numeric>,
    #[serde(skip)]
    precision: u32,
}

impl NumericCollection {
    /// Indexed list of values at `precision`
    ///
    /// # Errors
    /// [`CollectionError::PrecisionMismatch`] for the first element at another precision
    pub fn as_list(values: impl IntoIterator<Item = Numeric>, precision: u32) -> Result<Self, CollectionError> {
        Self::checked(values.into_iter().collect(), precision)
    }

    /// Keyed values at `precision`
    ///
    /// # Errors
    /// [`CollectionError::PrecisionMismatch`] for the first element at another precision
    pub fn as_map<K: Into<Key>>(
        pairs: impl IntoIterator<Item = (K, Numeric)>,
        precision: u32,
    ) -> Result<Self, CollectionError> {
        Self::checked(Collection::from_pairs(pairs), precision)
    }

    /// List at the precision configured in `config`
    ///
    /// # Errors
    /// - [`CollectionError::Numeric`] if the configuration is invalid
    /// - [`CollectionError::PrecisionMismatch`] as in [`NumericCollection::as_list`]
    pub fn with_config(values: impl IntoIterator<Item = Numeric>, config: &NumericConfig) -> Result<Self, CollectionError> {
        config.validate()?;
        Self::as_list(values, config.precision)
    }

    fn checked(inner: Collection<Numeric>, precision: u32) -> Result<Self, CollectionError> {
        if let Some(found) = inner.values().map(Numeric::precision).find(|p| *p != precision) {
            return Err(CollectionError::PrecisionMismatch {
                expected: precision,
                found,
            });
        }
        Ok(Self { inner, precision })
    }

    /// Precision shared by every element
    #[inline]
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Borrow the underlying collection for queries and derivations
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &Collection<Numeric> {
        &self.inner
    }

    /// Unwrap into the underlying collection
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Collection<Numeric> {
        self.inner
    }

    /// Append a value at the collection precision
    ///
    /// # Errors
    /// - [`CollectionError::ReadOnly`] on a frozen collection
    /// - [`CollectionError::PrecisionMismatch`] when `value` has another precision
    pub fn add(&mut self, value: Numeric) -> Result<&mut Self, CollectionError> {
        self.inner.ensure_mutable("add")?;
        if value.precision() != self.precision {
            return Err(CollectionError::PrecisionMismatch {
                expected: self.precision,
                found: value.precision(),
            });
        }
        self.inner.push(value)?;
        Ok(self)
    }

    /// Frozen copy
    #[must_use]
    pub fn as_read_only(&self) -> Self {
        Self {
            inner: self.inner.as_read_only(),
            precision: self.precision,
        }
    }

    /// Mutable copy
    #[must_use]
    pub fn to_mutable(&self) -> Self {
        Self {
            inner: self.inner.to_mutable(),
            precision: self.precision,
        }
    }

    /// # Errors
    /// [`CollectionError::Overflow`] if the total leaves the `i64` scaled range
    pub fn sum(&self) -> Result<Numeric, CollectionError> {
        self.or_zero(Collection::sum)
    }

    /// # Errors
    /// [`CollectionError::Overflow`] if the total leaves the `i64` scaled range
    pub fn avg(&self) -> Result<Numeric, CollectionError> {
        self.or_zero(Collection::avg)
    }

    /// # Errors
    /// Numeric rebuild errors
    pub fn min(&self) -> Result<Numeric, CollectionError> {
        self.or_zero(Collection::min)
    }

    /// # Errors
    /// Numeric rebuild errors
    pub fn max(&self) -> Result<Numeric, CollectionError> {
        self.or_zero(Collection::max)
    }

    fn or_zero(
        &self,
        aggregate: impl FnOnce(&Collection<Numeric>) -> Result<Numeric, CollectionError>,
    ) -> Result<Numeric, CollectionError> {
        if self.inner.is_empty() {
            return Ok(Numeric::zero(self.precision)?);
        }
        aggregate(&self.inner)
    }

    /// Structured form for log records, one entry per element
    #[must_use]
    pub fn to_log(&self) -> serde_json::Value {
        if self.inner.is_list() {
            serde_json::Value::Array(self.inner.values().map(Numeric::to_log).collect())
        } else {
            serde_json::Value::Object(
                self.inner
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_log()))
                    .collect(),
            )
        }
    }
}

impl From<NumericCollection> for Collection<Numeric> {
    fn from(numerics: NumericCollection) -> Self {
        numerics.inner
    }
}
