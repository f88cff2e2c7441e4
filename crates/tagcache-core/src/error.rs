//! Error types surfaced at the binding boundary.
//!
//! Normal cache operations (miss, absent key, invalid tag) are not errors —
//! they are represented directly as `bool`/`Option` returns. `CacheError`
//! exists only for conditions the engine cannot resolve on its own.

use thiserror::Error;

/// Error type for conditions that cross the binding boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is not a valid non-zero size.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(i64),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for fallible cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
