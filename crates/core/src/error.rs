//! Error types for the catalog store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Zero-match updates are NOT errors: operations that find nothing to touch
//! report `Ok(false)` and leave the store unchanged.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A field value was rejected by validation (negative stock or price,
    /// empty name, unrecognized category, duplicate identity)
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A predicate or projection could not be constructed
    /// (comparator incompatible with the field, wrong value type)
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// Shorthand for an `InvalidValue` error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Error::InvalidValue(msg.into())
    }

    /// Shorthand for an `InvalidQuery` error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Error::InvalidQuery(msg.into())
    }
}
