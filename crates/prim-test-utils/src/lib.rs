//! Testing utilities for the primitives workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use prim_collection::{Collection, Key, NumericCollection};
use prim_core::Numeric;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_test_writer()
            .try_init();
    });
}

/// Numeric parsed from `value` at `precision`
pub fn numeric(value: &str, precision: u32) -> Numeric {
    Numeric::of(value, precision).unwrap()
}

/// List of numerics at one precision
pub fn numeric_list(values: &[&str], precision: u32) -> Collection<Numeric> {
    values.iter().map(|value| numeric(value, precision)).collect()
}

/// Numeric collection at precision 2
pub fn price_list(values: &[&str]) -> NumericCollection {
    NumericCollection::as_list(values.iter().map(|value| numeric(value, 2)), 2).unwrap()
}

/// List `[1, 2, 3]`
pub fn sample_collection() -> Collection<i64> {
    Collection::of([1, 2, 3])
}

/// Map mixing string and integer keys
pub fn keyed_collection() -> Collection<&'static str> {
    Collection::from_pairs([
        (Key::from("first"), "a"),
        (Key::from(0), "b"),
        (Key::from("second"), "c"),
    ])
}
