//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business outcomes surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested record does not exist. Not an exceptional condition.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A write was rejected by the store's required-field enforcement.
    #[error("{0}")]
    Validation(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
