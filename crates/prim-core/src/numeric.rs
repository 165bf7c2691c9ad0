//! Fixed-precision decimal values
//!
//! A [`Numeric`] couples the logical value, its integer representation
//! scaled by `10^precision`, and the precision itself. Aggregates and
//! comparisons go through this type instead of bare floats.

use crate::bool_enum::BoolEnum;
use crate::config::NumericConfig;
use crate::error::NumericError;
use crate::locale::Locale;
use crate::rounding::{self, Digits, RoundingMode};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Largest supported precision (`10^18` still fits an `i64`)
pub const MAX_PRECISION: u32 = 18;

/// Maximum fraction digits rendered by [`Numeric::format`]
const FORMAT_MAX_FRACTION: u32 = 3;

/// Numeric string grammar: surrounding whitespace, sign, fraction, exponent
static NUMERIC_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$")
        .expect("numeric string pattern is valid")
});

/// Number-like input accepted at the construction boundary
#[derive(Debug, Clone, PartialEq)]
pub enum NumberLike {
    /// Plain integer
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Decimal string such as `"1.23"` or `" -4e2 "`
    Decimal(String),
    /// Already-built value
    Numeric(Numeric),
}

impl From<i64> for NumberLike {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NumberLike {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for NumberLike {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<String> for NumberLike {
    fn from(value: String) -> Self {
        Self::Decimal(value)
    }
}

impl From<Numeric> for NumberLike {
    fn from(value: Numeric) -> Self {
        Self::Numeric(value)
    }
}

impl From<&Numeric> for NumberLike {
    fn from(value: &Numeric) -> Self {
        Self::Numeric(*value)
    }
}

/// Immutable fixed-precision decimal
///
/// # Invariants
/// - `precision <= MAX_PRECISION`
/// - `int_value == round(input * 10^precision)` (half away from zero)
/// - `value == int_value / 10^precision`, so the value always sits on the
///   precision grid and agrees with aggregates over `int_value`
/// - the input is finite and, unless zero, not subnormal
///
/// Equality and ordering compare the scaled integers after rescaling to a
/// common precision, so `1.5` at precision 1 equals `1.50` at precision 2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "NumericRepr", try_from = "NumericRepr")]
pub struct Numeric {
    value: f64,
    int_value: i64,
    precision: u32,
    /// Input before scaling, re-rounded by [`Numeric::round`]
    input: f64,
}

impl Numeric {
    /// Build from any number-like input at `precision`
    ///
    /// # Errors
    /// - [`NumericError::InvalidPrecision`] above [`MAX_PRECISION`]
    /// - [`NumericError::NotNumeric`] for a non-numeric string
    /// - [`NumericError::FloatOutOfRange`] for non-finite or subnormal floats
    /// - [`NumericError::ScaledOverflow`] if the scaled value exceeds `i64`
    pub fn of(value: impl Into<NumberLike>, precision: u32) -> Result<Self, NumericError> {
        check_precision(precision)?;
        match value.into() {
            NumberLike::Int(int) => Self::from_whole(int, precision),
            NumberLike::Float(float) => Self::from_f64(float, precision),
            NumberLike::Decimal(text) => Self::from_f64(parse_decimal(&text)?, precision),
            NumberLike::Numeric(numeric) => Self::from_f64(numeric.value, precision),
        }
    }

    /// Build with the precision taken from `config`
    ///
    /// # Errors
    /// Same as [`Numeric::of`]
    pub fn of_with(value: impl Into<NumberLike>, config: &NumericConfig) -> Result<Self, NumericError> {
        Self::of(value, config.precision)
    }

    /// Rebuild from a pre-scaled integer
    ///
    /// Exact left inverse of scaling: `from_int(i, p).int_value() == i`.
    ///
    /// # Errors
    /// [`NumericError::InvalidPrecision`] above [`MAX_PRECISION`]
    pub fn from_int(scaled: i64, precision: u32) -> Result<Self, NumericError> {
        check_precision(precision)?;
        let value = on_grid(scaled, precision);
        Ok(Self {
            value,
            int_value: scaled,
            precision,
            input: value,
        })
    }

    /// Build from a float, inferring precision from its shortest decimal form
    ///
    /// `1.23` gets precision 2; precision is capped at [`MAX_PRECISION`].
    ///
    /// # Errors
    /// Same as [`Numeric::of`]
    pub fn from_float(value: f64) -> Result<Self, NumericError> {
        check_float(value)?;
        let precision = Digits::of(value).fraction_len().min(MAX_PRECISION);
        Self::from_f64(value, precision)
    }

    /// Zero at `precision`
    ///
    /// # Errors
    /// [`NumericError::InvalidPrecision`] above [`MAX_PRECISION`]
    pub fn zero(precision: u32) -> Result<Self, NumericError> {
        Self::from_int(0, precision)
    }

    fn from_whole(int: i64, precision: u32) -> Result<Self, NumericError> {
        #[allow(clippy::cast_precision_loss)]
        let input = int as f64;
        let int_value = rounding::pow10_i64(precision)
            .and_then(|factor| int.checked_mul(factor))
            .ok_or(NumericError::ScaledOverflow { value: input, precision })?;
        Ok(Self {
            value: on_grid(int_value, precision),
            int_value,
            precision,
            input,
        })
    }

    fn from_f64(input: f64, precision: u32) -> Result<Self, NumericError> {
        check_float(input)?;
        let int_value = rounding::scale(input, precision, RoundingMode::HalfUp)
            .ok_or(NumericError::ScaledOverflow { value: input, precision })?;
        Ok(Self {
            value: on_grid(int_value, precision),
            int_value,
            precision,
            input,
        })
    }

    /// Logical value, `int_value / 10^precision`
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Value scaled by `10^precision`
    #[inline]
    #[must_use]
    pub const fn int_value(&self) -> i64 {
        self.int_value
    }

    /// Number of decimal digits kept in `int_value`
    #[inline]
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Check if the scaled value is zero
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> BoolEnum {
        BoolEnum::from_bool(self.int_value == 0)
    }

    /// Absolute value
    ///
    /// # Errors
    /// [`NumericError::ScaledOverflow`] when `int_value` is `i64::MIN`
    pub fn abs(&self) -> Result<Self, NumericError> {
        let int_value = self.int_value.checked_abs().ok_or(NumericError::ScaledOverflow {
            value: self.value,
            precision: self.precision,
        })?;
        Ok(Self {
            value: self.value.abs(),
            int_value,
            precision: self.precision,
            input: self.input.abs(),
        })
    }

    /// Re-round the construction input at the stored precision with `mode`
    ///
    /// Construction always rounds half up; this picks another tie rule.
    ///
    /// # Errors
    /// [`NumericError::ScaledOverflow`] if rounding leaves `i64` range
    pub fn round(&self, mode: RoundingMode) -> Result<Self, NumericError> {
        let scaled = rounding::scale(self.input, self.precision, mode).ok_or(
            NumericError::ScaledOverflow {
                value: self.value,
                precision: self.precision,
            },
        )?;
        Self::from_int(scaled, self.precision)
    }

    /// Round with the mode configured in `config`
    ///
    /// # Errors
    /// Same as [`Numeric::round`]
    pub fn round_with(&self, config: &NumericConfig) -> Result<Self, NumericError> {
        self.round(config.rounding)
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn greater_than(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        let that = coerce(other)?;
        Ok(BoolEnum::from_bool(*self > that))
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn greater_than_or_equal(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        let that = coerce(other)?;
        Ok(BoolEnum::from_bool(*self >= that))
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn less_than(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        let that = coerce(other)?;
        Ok(BoolEnum::from_bool(*self < that))
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn less_than_or_equal(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        let that = coerce(other)?;
        Ok(BoolEnum::from_bool(*self <= that))
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn equal_to(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        let that = coerce(other)?;
        Ok(BoolEnum::from_bool(*self == that))
    }

    /// # Errors
    /// Fails if `other` cannot be coerced into a [`Numeric`]
    pub fn not_equal_to(&self, other: impl Into<NumberLike>) -> Result<BoolEnum, NumericError> {
        Ok(!self.equal_to(other)?)
    }

    /// Exclusive range check: `min < self < max`
    ///
    /// The range shape is validated first; an empty range is an error, never
    /// a silent `false`.
    ///
    /// # Errors
    /// [`NumericError::MalformedRange`] unless `min < max`
    pub fn between(
        &self,
        min: impl Into<NumberLike>,
        max: impl Into<NumberLike>,
    ) -> Result<BoolEnum, NumericError> {
        let (min, max) = (coerce(min)?, coerce(max)?);
        BoolEnum::from_bool(min >= max)
            .throw_if_true(format!("the minimum value {min} must be less than the maximum value {max}"))?;

        Ok(BoolEnum::from_bool(*self > min && *self < max))
    }

    /// Inclusive range check: `min <= self <= max`
    ///
    /// # Errors
    /// [`NumericError::MalformedRange`] when `min > max`
    pub fn between_or_equal(
        &self,
        min: impl Into<NumberLike>,
        max: impl Into<NumberLike>,
    ) -> Result<BoolEnum, NumericError> {
        let (min, max) = (coerce(min)?, coerce(max)?);
        BoolEnum::from_bool(min > max)
            .throw_if_true(format!("the minimum value {min} must not exceed the maximum value {max}"))?;

        Ok(BoolEnum::from_bool(*self >= min && *self <= max))
    }

    /// Locale-aware decimal rendering
    ///
    /// Groups the integer part, uses the locale's separators and renders at
    /// most three fraction digits (half-even), dropping trailing zeros.
    ///
    /// # Errors
    /// [`NumericError::Format`] when no number symbols exist for the locale
    pub fn format(&self, locale: &Locale) -> Result<String, NumericError> {
        let symbols = locale.number_symbols().ok_or_else(|| NumericError::Format {
            locale: locale.code().to_string(),
        })?;

        let (scaled, precision) = reduce_fraction(self.int_value, self.precision);
        let (negative, whole, fraction) = split_scaled(scaled, precision);
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::new();
        if negative {
            out.push_str(symbols.minus);
        }
        out.push_str(&symbols.group_digits(&whole.to_string()));
        if !fraction.is_empty() {
            out.push_str(symbols.decimal);
            out.push_str(fraction);
        }
        Ok(out)
    }

    /// Format with the locale configured in `config`
    ///
    /// # Errors
    /// Same as [`Numeric::format`]
    pub fn format_with(&self, config: &NumericConfig) -> Result<String, NumericError> {
        self.format(&config.locale())
    }

    /// Structured form for log records
    #[must_use]
    pub fn to_log(&self) -> serde_json::Value {
        serde_json::json!({
            "value": self.value,
            "int_value": self.int_value,
            "precision": self.precision,
        })
    }
}

impl Numeric {
    /// Scaled integer at `precision`, which must not be below `self.precision`
    fn widened(&self, precision: u32) -> i128 {
        i128::from(self.int_value) * 10_i128.pow(precision - self.precision)
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Numeric {}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        let precision = self.precision.max(other.precision);
        self.widened(precision).cmp(&other.widened(precision))
    }
}

/// Fixed rendering with exactly `precision` fraction digits
impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, whole, fraction) = split_scaled(self.int_value, self.precision);
        if negative {
            f.write_str("-")?;
        }
        write!(f, "{whole}")?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

/// Serialized shape: `{ "value", "int_value", "precision" }`
///
/// `int_value` is informational on input; it is recomputed from `value`.
#[derive(Serialize, Deserialize)]
struct NumericRepr {
    value: f64,
    #[serde(default)]
    int_value: i64,
    precision: u32,
}

impl From<Numeric> for NumericRepr {
    fn from(numeric: Numeric) -> Self {
        Self {
            value: numeric.value,
            int_value: numeric.int_value,
            precision: numeric.precision,
        }
    }
}

impl TryFrom<NumericRepr> for Numeric {
    type Error = NumericError;

    fn try_from(repr: NumericRepr) -> Result<Self, Self::Error> {
        Self::of(repr.value, repr.precision)
    }
}

fn check_precision(precision: u32) -> Result<(), NumericError> {
    if precision > MAX_PRECISION {
        return Err(NumericError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }
    Ok(())
}

fn check_float(value: f64) -> Result<(), NumericError> {
    if !value.is_finite() || (value != 0.0 && value.abs() < f64::MIN_POSITIVE) {
        return Err(NumericError::FloatOutOfRange(value));
    }
    Ok(())
}

fn parse_decimal(text: &str) -> Result<f64, NumericError> {
    if !NUMERIC_STRING.is_match(text) {
        return Err(NumericError::NotNumeric(text.to_string()));
    }
    text.trim()
        .parse()
        .map_err(|_| NumericError::NotNumeric(text.to_string()))
}

/// Integers coerce at precision 0; floats and decimal strings keep every
/// digit of their shortest form
fn coerce(other: impl Into<NumberLike>) -> Result<Numeric, NumericError> {
    match other.into() {
        NumberLike::Numeric(numeric) => Ok(numeric),
        NumberLike::Int(int) => Numeric::of(int, 0),
        NumberLike::Float(float) => Numeric::from_float(float),
        NumberLike::Decimal(text) => Numeric::from_float(parse_decimal(&text)?),
    }
}

#[allow(clippy::cast_precision_loss)]
fn on_grid(scaled: i64, precision: u32) -> f64 {
    scaled as f64 / rounding::pow10_f64(precision)
}

/// Reduce a scaled integer to at most [`FORMAT_MAX_FRACTION`] digits, half-even
fn reduce_fraction(scaled: i64, precision: u32) -> (i128, u32) {
    if precision <= FORMAT_MAX_FRACTION {
        return (i128::from(scaled), precision);
    }
    let divisor = 10i128.pow(precision - FORMAT_MAX_FRACTION);
    let magnitude = i128::from(scaled).abs();
    let (q, r) = (magnitude / divisor, magnitude % divisor);
    let q = match (r * 2).cmp(&divisor) {
        Ordering::Less => q,
        Ordering::Greater => q + 1,
        Ordering::Equal => q + (q % 2),
    };
    (if scaled < 0 { -q } else { q }, FORMAT_MAX_FRACTION)
}

/// Split a scaled integer into sign, whole part and zero-padded fraction
fn split_scaled(scaled: impl Into<i128>, precision: u32) -> (bool, u128, String) {
    let scaled = scaled.into();
    let magnitude = scaled.unsigned_abs();
    if precision == 0 {
        return (scaled < 0, magnitude, String::new());
    }
    let divisor = 10u128.pow(precision);
    let width = precision as usize;
    let fraction = format!("{:0width$}", magnitude % divisor);
    (scaled < 0, magnitude / divisor, fraction)
}
