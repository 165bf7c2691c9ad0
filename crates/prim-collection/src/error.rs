//! Error types for collections

use prim_core::NumericError;

/// Errors raised by [`Collection`](crate::Collection) operations
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// Mutation attempted on a frozen collection
    #[error("cannot {operation} a read-only collection; use to_mutable() to obtain a mutable copy")]
    ReadOnly { operation: &'static str },

    /// Element precision differs from the collection precision
    #[error("all elements must have the same precision as the collection: expected {expected}, found {found}")]
    PrecisionMismatch { expected: u32, found: u32 },

    /// Element could not be turned into a numeric value
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),

    /// Aggregate left the representable range
    #[error("{0} overflowed the scaled integer range")]
    Overflow(&'static str),

    /// JSON export failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CollectionError {
    /// Check if the caller can recover by retrying on a mutable copy
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ReadOnly { .. })
    }

    /// Name of the rejected operation, for read-only violations
    #[inline]
    #[must_use]
    pub fn rejected_operation(&self) -> Option<&'static str> {
        match self {
            Self::ReadOnly { operation } => Some(operation),
            _ => None,
        }
    }
}
