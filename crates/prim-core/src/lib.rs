//! Primitives Core
//!
//! Immutable value objects shared by the collection layer.
//!
//! # Core Concepts
//!
//! - [`BoolEnum`]: closed boolean outcome returned by every predicate
//! - [`Numeric`]: fixed-precision decimal (`value`, scaled `int_value`, `precision`)
//! - [`Int`]: integer value object with comparison and parity helpers
//! - [`Locale`]: locale code with number symbols for formatting
//! - [`NumericConfig`]: precision, rounding and locale defaults
//!
//! All value types are `Copy` or cheaply `Clone`, and `Send + Sync`.
//!
//! # Example
//!
//! ```rust
//! use prim_core::{Locale, Numeric, RoundingMode};
//!
//! let price = Numeric::of("1234.565", 2)?;
//! assert_eq!(price.int_value(), 123_457);
//! assert!(price.between(1000, 2000)?.yes());
//!
//! let rounded = price.round(RoundingMode::HalfDown)?;
//! assert_eq!(rounded.format(&Locale::of(Locale::EN_US))?, "1,234.56");
//! # Ok::<(), prim_core::NumericError>(())
//! ```

#![warn(unreachable_pub)]

mod bool_enum;
mod config;
mod error;
mod int;
mod locale;
mod numeric;
mod rounding;

pub use bool_enum::BoolEnum;
pub use config::NumericConfig;
pub use error::{AssertionFailure, BoxError, IntError, NumericError};
pub use int::{Int, IntLike};
pub use locale::{Locale, NumberSymbols};
pub use numeric::{NumberLike, Numeric, MAX_PRECISION};
pub use rounding::RoundingMode;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for value objects
    pub use crate::{BoolEnum, Int, Locale, Numeric, NumericConfig, RoundingMode};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
