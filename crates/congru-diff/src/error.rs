//! Error types for the diff crate.

use thiserror::Error;

/// Errors that can occur during diff operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// Recursion exceeded the configured depth guard.
    #[error("nesting depth exceeds the configured limit of {limit}")]
    MaxDepthExceeded { limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
