//! Domain-level error types.

use thiserror::Error;

/// Domain errors surfaced to request handlers.
///
/// Every failure of the post service is exactly one of these four kinds.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Malformed identifier: {0}")]
    InvalidIdentifier(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Storage(msg),
            RepoError::InvalidIdentifier(msg) => DomainError::InvalidIdentifier(msg),
            // Lookups by id map this to `NotFound` themselves; anywhere else a
            // missing document means the store lost what it just reported.
            RepoError::NotFound => {
                DomainError::Storage("document missing from store".to_string())
            }
        }
    }
}
