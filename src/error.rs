//! Storage error types.
//!
//! Used by store implementations and callers of storage APIs. An absent
//! record is an ordinary empty result, never an error.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing medium could not complete the operation.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
