//! Store error types

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No person is registered under this name
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// A tree file line could not be understood
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error while reading or writing a tree file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
