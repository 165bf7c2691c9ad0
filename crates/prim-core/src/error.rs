//! Error types for value objects
//!
//! Every failure here is an input or programmer error raised at the point of
//! detection:
//! - Assertion failures produced by [`BoolEnum`](crate::BoolEnum) guards
//! - Invalid numeric construction, rounding and formatting
//! - Integer coercion failures

use std::error::Error as StdError;

/// Boxed error usable as the cause of an [`AssertionFailure`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised by [`BoolEnum::throw_if_true`](crate::BoolEnum::throw_if_true)
/// and [`BoolEnum::throw_if_false`](crate::BoolEnum::throw_if_false)
///
/// Carries either a literal message or the message of a pre-built error,
/// which is then kept as [`source`](StdError::source).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl AssertionFailure {
    /// Create failure from a literal message
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create failure wrapping a pre-built error
    ///
    /// The failure message is the error's own message.
    #[must_use]
    pub fn caused_by(error: impl Into<BoxError>) -> Self {
        let error = error.into();
        Self {
            message: error.to_string(),
            source: Some(error),
        }
    }

    /// Get failure message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for AssertionFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for AssertionFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Errors raised while building or using a [`Numeric`](crate::Numeric)
#[derive(Debug, thiserror::Error)]
pub enum NumericError {
    /// Precision above the supported scale
    #[error("precision {precision} exceeds the maximum of {max}")]
    InvalidPrecision { precision: u32, max: u32 },

    /// String input is not a number
    #[error("the provided string value must be numeric: {0:?}")]
    NotNumeric(String),

    /// Value cannot be represented as a normal floating point number
    #[error("the value {0} is out of range for floating point numbers")]
    FloatOutOfRange(f64),

    /// Scaled representation does not fit a signed 64-bit integer
    #[error("the value {value} scaled to precision {precision} exceeds the allowed limits")]
    ScaledOverflow { value: f64, precision: u32 },

    /// Unknown rounding mode code or name
    #[error("invalid rounding mode provided: {0}")]
    InvalidRoundingMode(String),

    /// Range bounds given in the wrong order
    #[error("malformed range: {0}")]
    MalformedRange(#[from] AssertionFailure),

    /// Locale has no number formatting symbols
    #[error("failed to format the number for locale {locale}")]
    Format { locale: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Errors raised while building or using an [`Int`](crate::Int)
#[derive(Debug, thiserror::Error)]
pub enum IntError {
    /// Floats are never truncated into integers
    #[error("Int::of() expects an integer or an integer string, float {0} given")]
    FloatRejected(f64),

    /// String does not hold an integer
    #[error("the provided string value must be an integer: {0:?}")]
    NotInteger(String),

    /// Range bounds given in the wrong order
    #[error("malformed range: {0}")]
    MalformedRange(#[from] AssertionFailure),

    /// Result does not fit a signed 64-bit integer
    #[error("integer overflow computing {0}")]
    Overflow(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failure_from_literal_has_no_source() {
        let failure = AssertionFailure::from("boom");
        assert_eq!(failure.message(), "boom");
        assert_eq!(failure.to_string(), "boom");
        assert!(failure.source().is_none());
    }

    #[test]
    fn assertion_failure_caused_by_keeps_source() {
        let cause = NumericError::NotNumeric("abc".to_string());
        let expected = cause.to_string();
        let failure = AssertionFailure::caused_by(cause);

        assert_eq!(failure.message(), expected);
        let source = failure.source().expect("source kept");
        assert_eq!(source.to_string(), expected);
    }

    #[test]
    fn assertion_failure_source_downcasts_to_cause() {
        let failure = AssertionFailure::caused_by(NumericError::NotNumeric("x".to_string()));
        let source = failure.source().and_then(|e| e.downcast_ref::<NumericError>());
        assert!(matches!(source, Some(NumericError::NotNumeric(text)) if text == "x"));
    }

    #[test]
    fn malformed_range_wraps_assertion() {
        let err = NumericError::from(AssertionFailure::new("min above max"));
        assert_eq!(err.to_string(), "malformed range: min above max");
    }
}
