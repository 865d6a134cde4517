use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl RepositoryError {
    /// Shorthand for a missing item.
    pub fn item_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Item",
            id: id.to_string(),
        }
    }

    /// Shorthand for a duplicate item.
    pub fn item_already_exists(id: i64) -> Self {
        Self::AlreadyExists {
            entity_type: "Item",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
