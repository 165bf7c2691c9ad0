//! Numeric defaults
//!
//! [`NumericConfig`] carries the precision, rounding mode and locale applied
//! by the `*_with` helpers on [`Numeric`](crate::Numeric). It can be built in
//! code or loaded from TOML:
//!
//! ```toml
//! precision = 2
//! rounding = "half_even"
//! locale = "fr_FR"
//! ```

use crate::error::NumericError;
use crate::locale::Locale;
use crate::numeric::MAX_PRECISION;
use crate::rounding::RoundingMode;
use serde::{Deserialize, Serialize};

/// Defaults for numeric construction, rounding and formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Scale used by [`Numeric::of_with`](crate::Numeric::of_with)
    pub precision: u32,
    /// Mode used by [`Numeric::round_with`](crate::Numeric::round_with)
    pub rounding: RoundingMode,
    /// Locale code used by [`Numeric::format_with`](crate::Numeric::format_with)
    pub locale: String,
}

impl NumericConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With precision
    #[inline]
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// With rounding mode
    #[inline]
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// With locale code
    #[inline]
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Configured locale
    #[inline]
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::of(self.locale.as_str())
    }

    /// Load from a TOML document; missing keys keep their defaults
    ///
    /// # Errors
    /// - [`NumericError::Config`] for malformed TOML or unknown values
    /// - [`NumericError::InvalidPrecision`] above the supported maximum
    pub fn from_toml_str(source: &str) -> Result<Self, NumericError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// [`NumericError::InvalidPrecision`] above the supported maximum
    pub fn validate(&self) -> Result<(), NumericError> {
        if self.precision > MAX_PRECISION {
            return Err(NumericError::InvalidPrecision {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            precision: 0,
            rounding: RoundingMode::HalfUp,
            locale: Locale::EN_US.to_string(),
        }
    }
}
