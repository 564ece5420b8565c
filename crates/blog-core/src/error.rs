//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Request path id ({path}) and request body id ({body}) must match")]
    IdMismatch { path: String, body: String },
}

impl DomainError {
    pub fn post_not_found(id: impl ToString) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Post {0} not found")]
    NotFound(PostId),
}
