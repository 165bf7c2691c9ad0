//! Closed boolean outcome
//!
//! [`BoolEnum`] is the uniform return type of every predicate in the
//! workspace. Its guards turn a boolean check into a returned failure.

use crate::error::AssertionFailure;
use std::fmt::{self, Display, Formatter};
use std::ops::Not;

/// Boolean outcome with fail-fast helpers
///
/// Exactly two values exist; there is no construction path to a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoolEnum {
    /// Condition does not hold
    False,
    /// Condition holds
    True,
}

impl BoolEnum {
    /// Build from a primitive boolean
    #[inline]
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }

    /// Check for [`BoolEnum::True`]
    #[inline]
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Check for [`BoolEnum::False`]
    #[inline]
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Alias of [`is_true`](Self::is_true) for call-site readability
    #[inline]
    #[must_use]
    pub const fn yes(self) -> bool {
        self.is_true()
    }

    /// Alias of [`is_false`](Self::is_false) for call-site readability
    #[inline]
    #[must_use]
    pub const fn no(self) -> bool {
        self.is_false()
    }

    /// Plain `bool`
    #[inline]
    #[must_use]
    pub const fn as_bool(self) -> bool {
        self.is_true()
    }

    /// `1` for true, `0` for false
    #[inline]
    #[must_use]
    pub const fn as_int(self) -> i64 {
        match self {
            Self::True => 1,
            Self::False => 0,
        }
    }

    /// Lower-cased literal: `"true"` or `"false"`
    #[inline]
    #[must_use]
    pub const fn as_string(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }

    /// Fail with `message` when the value is true
    ///
    /// `message` is a literal or a pre-built error wrapped with
    /// [`AssertionFailure::caused_by`].
    ///
    /// # Errors
    /// Returns the failure when the value is [`BoolEnum::True`]
    pub fn throw_if_true(self, message: impl Into<AssertionFailure>) -> Result<(), AssertionFailure> {
        if self.is_false() {
            return Ok(());
        }
        Err(Self::fail(message.into()))
    }

    /// Fail with `message` when the value is false
    ///
    /// # Errors
    /// Returns the failure when the value is [`BoolEnum::False`]
    pub fn throw_if_false(self, message: impl Into<AssertionFailure>) -> Result<(), AssertionFailure> {
        if self.is_true() {
            return Ok(());
        }
        Err(Self::fail(message.into()))
    }

    fn fail(failure: AssertionFailure) -> AssertionFailure {
        tracing::debug!(message = failure.message(), "assertion failed");
        failure
    }
}

impl From<bool> for BoolEnum {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<BoolEnum> for bool {
    #[inline]
    fn from(value: BoolEnum) -> Self {
        value.as_bool()
    }
}

impl Not for BoolEnum {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_bool(self.is_false())
    }
}

impl Display for BoolEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumericError;
    use std::error::Error;

    #[test]
    fn from_bool_is_canonical() {
        assert_eq!(BoolEnum::from_bool(true), BoolEnum::True);
        assert_eq!(BoolEnum::from_bool(false), BoolEnum::False);
        assert_eq!(BoolEnum::from(true), BoolEnum::from_bool(true));
    }

    #[test]
    fn predicates_and_aliases_agree() {
        let yes = BoolEnum::from_bool(true);
        assert!(yes.is_true() && yes.yes() && yes.as_bool());
        assert!(!yes.is_false() && !yes.no());

        let no = BoolEnum::from_bool(false);
        assert!(no.is_false() && no.no());
        assert!(!no.is_true() && !no.yes() && !no.as_bool());
    }

    #[test]
    fn conversions() {
        assert_eq!(BoolEnum::True.as_int(), 1);
        assert_eq!(BoolEnum::False.as_int(), 0);
        assert_eq!(BoolEnum::True.as_string(), "true");
        assert_eq!(BoolEnum::False.to_string(), "false");
        assert!(bool::from(BoolEnum::True));
        assert_eq!(!BoolEnum::True, BoolEnum::False);
    }

    #[test]
    fn throw_if_false_passes_on_true() {
        assert!(BoolEnum::from_bool(true).throw_if_false("x").is_ok());
    }

    #[test]
    fn throw_if_false_carries_message() {
        let err = BoolEnum::from_bool(false).throw_if_false("x").unwrap_err();
        assert_eq!(err.message(), "x");
    }

    #[test]
    fn throw_if_true() {
        assert!(BoolEnum::False.throw_if_true("never").is_ok());
        let err = BoolEnum::True.throw_if_true(String::from("must be false")).unwrap_err();
        assert_eq!(err.to_string(), "must be false");
    }

    #[test]
    fn throw_with_prebuilt_error_keeps_cause() {
        let cause = NumericError::NotNumeric("abc".to_string());
        let err = BoolEnum::True
            .throw_if_true(AssertionFailure::caused_by(cause))
            .unwrap_err();

        assert!(err.message().contains("must be numeric"));
        assert!(err.source().is_some());
    }
}
