use thiserror::Error;

/// Errors produced by value model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("{0} cannot be used as a collection key")]
    UnhashableKey(String),
}
