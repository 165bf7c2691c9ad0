//! Primitives Collection
//!
//! Insertion-ordered collections with a single mutation guard.
//!
//! # Core Concepts
//!
//! - [`Collection`]: ordered map of [`Key`] to values, mutable or read-only
//! - Freeze/thaw: [`Collection::as_read_only`] and [`Collection::to_mutable`]
//!   return new instances over copied entries
//! - Guard: every mutating method calls [`Collection::ensure_mutable`] first
//!   and fails with [`CollectionError::ReadOnly`] before any write
//! - Aggregates: `sum`, `avg`, `min`, `max` for values implementing
//!   [`AsNumeric`], always returning [`Numeric`](prim_core::Numeric)
//!
//! Mutations take `&mut self`, so concurrent mutation is ruled out by the
//! borrow checker. Share frozen collections with `Arc`.
//!
//! # Example
//!
//! ```rust
//! use prim_collection::{Collection, CollectionError};
//!
//! let mut numbers = Collection::of([1_i32, 2, 3]);
//! numbers.push(4)?;
//!
//! let mut frozen = numbers.as_read_only();
//! assert!(matches!(frozen.push(5), Err(CollectionError::ReadOnly { .. })));
//!
//! assert_eq!(numbers.sum()?.int_value(), 10);
//! assert_eq!(frozen.to_json()?, "[1,2,3,4]");
//! # Ok::<(), CollectionError>(())
//! ```

#![warn(unreachable_pub)]

mod aggregate;
mod collection;
mod error;
mod key;
mod mutation;
mod numeric_collection;
mod ops;

pub use aggregate::AsNumeric;
pub use collection::Collection;
pub use error::CollectionError;
pub use key::Key;
pub use numeric_collection::NumericCollection;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for collections and value objects
    pub use crate::{AsNumeric, Collection, CollectionError, Key, NumericCollection};
    pub use prim_core::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
