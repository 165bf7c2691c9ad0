//! Numeric aggregates
//!
//! `sum`, `avg`, `min` and `max` work on any collection whose values convert
//! to [`Numeric`]. Elements are rescaled exactly to the widest precision
//! present and combined as `i128` scaled integers; the result is rebuilt with
//! [`Numeric::from_int`], so no float arithmetic touches the total.

use crate::collection::Collection;
use crate::error::CollectionError;
use prim_core::{Int, Numeric, NumericError};

/// Conversion of a collection value into a [`Numeric`]
pub trait AsNumeric {
    /// # Errors
    /// Whatever [`Numeric`] construction reports for this value
    fn as_numeric(&self) -> Result<Numeric, NumericError>;
}

impl AsNumeric for Numeric {
    fn as_numeric(&self) -> Result<Numeric, NumericError> {
        Ok(*self)
    }
}

impl AsNumeric for Int {
    fn as_numeric(&self) -> Result<Numeric, NumericError> {
        Numeric::of(self.value(), 0)
    }
}

impl AsNumeric for i64 {
    fn as_numeric(&self) -> Result<Numeric, NumericError> {
        Numeric::of(*self, 0)
    }
}

impl AsNumeric for i32 {
    fn as_numeric(&self) -> Result<Numeric, NumericError> {
        Numeric::of(*self, 0)
    }
}

/// Precision is inferred from the shortest decimal form
impl AsNumeric for f64 {
    fn as_numeric(&self) -> Result<Numeric, NumericError> {
        Numeric::from_float(*self)
    }
}

/// Values rescaled to a shared precision
struct Scaled {
    values: Vec<i128>,
    precision: u32,
}

impl Scaled {
    fn gather<'a, V: AsNumeric + 'a>(values: impl Iterator<Item = &'a V>) -> Result<Self, CollectionError> {
        let numerics = values.map(AsNumeric::as_numeric).collect::<Result<Vec<_>, _>>()?;
        let precision = numerics.iter().map(Numeric::precision).max().unwrap_or(0);
        let values = numerics
            .iter()
            .map(|numeric| i128::from(numeric.int_value()) * 10_i128.pow(precision - numeric.precision()))
            .collect();
        Ok(Self { values, precision })
    }

    fn rebuild(&self, scaled: i128, operation: &'static str) -> Result<Numeric, CollectionError> {
        let scaled = i64::try_from(scaled).map_err(|_| CollectionError::Overflow(operation))?;
        Ok(Numeric::from_int(scaled, self.precision)?)
    }

    fn total(&self) -> Result<i128, CollectionError> {
        self.values
            .iter()
            .try_fold(0_i128, |acc, value| acc.checked_add(*value))
            .ok_or(CollectionError::Overflow("sum"))
    }
}

impl<V: AsNumeric> Collection<V> {
    /// Exact sum at the widest element precision; `zero(0)` when empty
    ///
    /// # Errors
    /// - [`CollectionError::Numeric`] if a value cannot be converted
    /// - [`CollectionError::Overflow`] if the total leaves the `i64` scaled range
    pub fn sum(&self) -> Result<Numeric, CollectionError> {
        let scaled = Scaled::gather(self.items.values())?;
        let total = scaled.total()?;
        scaled.rebuild(total, "sum")
    }

    /// Mean rounded half away from zero at the widest element precision
    ///
    /// # Errors
    /// Same as [`Collection::sum`]
    pub fn avg(&self) -> Result<Numeric, CollectionError> {
        let scaled = Scaled::gather(self.items.values())?;
        if scaled.values.is_empty() {
            return Ok(Numeric::zero(0)?);
        }
        let total = scaled.total()?;
        let count = i128::try_from(scaled.values.len()).map_err(|_| CollectionError::Overflow("avg"))?;
        let (quotient, remainder) = (total / count, total % count);
        let mean = if remainder.abs() * 2 >= count {
            quotient + total.signum()
        } else {
            quotient
        };
        scaled.rebuild(mean, "avg")
    }

    /// Smallest value; `zero(0)` when empty
    ///
    /// # Errors
    /// Same as [`Collection::sum`]
    pub fn min(&self) -> Result<Numeric, CollectionError> {
        let scaled = Scaled::gather(self.items.values())?;
        let least = scaled.values.iter().copied().min().unwrap_or(0);
        scaled.rebuild(least, "min")
    }

    /// Largest value; `zero(0)` when empty
    ///
    /// # Errors
    /// Same as [`Collection::sum`]
    pub fn max(&self) -> Result<Numeric, CollectionError> {
        let scaled = Scaled::gather(self.items.values())?;
        let greatest = scaled.values.iter().copied().max().unwrap_or(0);
        scaled.rebuild(greatest, "max")
    }
}
