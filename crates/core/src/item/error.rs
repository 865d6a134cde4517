use thiserror::Error;

/// Errors raised when an item fails validation before reaching a repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Invalid item: id must be a non-zero integer")]
    MissingId,
}
