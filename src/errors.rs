//! Centralized error handling for the store layer.
//!
//! The taxonomy is deliberately narrow: argument validation failures are
//! raised before any I/O, a missing role during assignment is an
//! invalid-operation failure, and everything the backend raises passes
//! through untranslated. A lookup miss is `Ok(None)`, never an error.

use thiserror::Error;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required argument was empty. Raised synchronously, before any
    /// database I/O is issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation cannot proceed in the current state, e.g. assigning
    /// a user to a role that does not exist.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Backend failure, propagated unchanged. This layer performs no
    /// wrapping, translation, or retry.
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),
}

impl StoreError {
    /// Create an invalid-argument error naming the offending argument.
    pub fn invalid_argument(name: &'static str) -> Self {
        StoreError::InvalidArgument(name)
    }

    /// Create an invalid-operation error.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        StoreError::InvalidOperation(msg.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
