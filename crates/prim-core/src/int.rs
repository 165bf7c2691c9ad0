//! Integer value object
//!
//! [`Int`] mirrors the comparison surface of [`Numeric`](crate::Numeric)
//! on a raw `i64`, without scaling.

use crate::bool_enum::BoolEnum;
use crate::error::IntError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Integer-like input accepted by [`Int::of`]
///
/// `Float` exists so that floats are rejected explicitly rather than
/// truncated.
#[derive(Debug, Clone, PartialEq)]
pub enum IntLike {
    /// Native integer
    Int(i64),
    /// Integer string such as `"-42"`
    Text(String),
    /// Always rejected
    Float(f64),
    /// Existing value, passed through
    Wrapped(Int),
}

impl From<i64> for IntLike {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for IntLike {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for IntLike {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for IntLike {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for IntLike {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IntLike {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Int> for IntLike {
    fn from(value: Int) -> Self {
        Self::Wrapped(value)
    }
}

impl From<&Int> for IntLike {
    fn from(value: &Int) -> Self {
        Self::Wrapped(*value)
    }
}

/// Immutable signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Int(i64);

impl Int {
    /// Wrap an integer, parse an integer string, or pass an [`Int`] through
    ///
    /// # Errors
    /// - [`IntError::FloatRejected`] for any float input
    /// - [`IntError::NotInteger`] for strings that are not integers
    pub fn of(value: impl Into<IntLike>) -> Result<Self, IntError> {
        match value.into() {
            IntLike::Int(int) => Ok(Self(int)),
            IntLike::Wrapped(int) => Ok(int),
            IntLike::Float(float) => Err(IntError::FloatRejected(float)),
            IntLike::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| IntError::NotInteger(text)),
        }
    }

    /// Wrap an integer
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Wrapped integer
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check if above zero
    #[inline]
    #[must_use]
    pub const fn is_positive(&self) -> BoolEnum {
        BoolEnum::from_bool(self.0 > 0)
    }

    /// Check if below zero
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> BoolEnum {
        BoolEnum::from_bool(self.0 < 0)
    }

    /// Check if zero
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> BoolEnum {
        BoolEnum::from_bool(self.0 == 0)
    }

    /// Check if divisible by two
    #[inline]
    #[must_use]
    pub const fn is_even(&self) -> BoolEnum {
        BoolEnum::from_bool(self.0 % 2 == 0)
    }

    /// Check if not divisible by two
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> BoolEnum {
        BoolEnum::from_bool(self.0 % 2 != 0)
    }

    /// # Errors
    /// [`IntError::Overflow`] for `i64::MIN`
    pub fn abs(&self) -> Result<Self, IntError> {
        self.0.checked_abs().map(Self).ok_or(IntError::Overflow("abs"))
    }

    /// Exclusive range check: `min < self < max`
    ///
    /// # Errors
    /// [`IntError::MalformedRange`] unless `min < max`; coercion errors from
    /// [`Int::of`]
    pub fn between(&self, min: impl Into<IntLike>, max: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        let (min, max) = (Self::of(min)?, Self::of(max)?);
        BoolEnum::from_bool(min >= max)
            .throw_if_true(format!("the minimum value {min} must be less than the maximum value {max}"))?;
        Ok(BoolEnum::from_bool(self.0 > min.0 && self.0 < max.0))
    }

    /// Inclusive range check: `min <= self <= max`
    ///
    /// # Errors
    /// [`IntError::MalformedRange`] when `min > max`; coercion errors from
    /// [`Int::of`]
    pub fn between_or_equal(
        &self,
        min: impl Into<IntLike>,
        max: impl Into<IntLike>,
    ) -> Result<BoolEnum, IntError> {
        let (min, max) = (Self::of(min)?, Self::of(max)?);
        BoolEnum::from_bool(min > max)
            .throw_if_true(format!("the minimum value {min} must not exceed the maximum value {max}"))?;
        Ok(BoolEnum::from_bool(self.0 >= min.0 && self.0 <= max.0))
    }

    /// # Errors
    /// Coercion errors from [`Int::of`]
    pub fn greater_than(&self, other: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        Ok(BoolEnum::from_bool(self.0 > Self::of(other)?.0))
    }

    /// # Errors
    /// Coercion errors from [`Int::of`]
    pub fn greater_than_or_equal(&self, other: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        Ok(BoolEnum::from_bool(self.0 >= Self::of(other)?.0))
    }

    /// # Errors
    /// Coercion errors from [`Int::of`]
    pub fn less_than(&self, other: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        Ok(BoolEnum::from_bool(self.0 < Self::of(other)?.0))
    }

    /// # Errors
    /// Coercion errors from [`Int::of`]
    pub fn less_than_or_equal(&self, other: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        Ok(BoolEnum::from_bool(self.0 <= Self::of(other)?.0))
    }

    /// # Errors
    /// Coercion errors from [`Int::of`]
    pub fn equals_to(&self, other: impl Into<IntLike>) -> Result<BoolEnum, IntError> {
        Ok(BoolEnum::from_bool(self.0 == Self::of(other)?.0))
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl FromStr for Int {
    type Err = IntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
