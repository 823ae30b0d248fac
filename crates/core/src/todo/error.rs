use thiserror::Error;
use uuid::Uuid;

use crate::storage::{BlobStoreError, RepositoryError};

/// Errors surfaced by todo operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Could not find a todo with the id {todo_id}")]
    NotFound { todo_id: Uuid },
    #[error("Invalid todo id {todo_id}")]
    InvalidReference { todo_id: Uuid },
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<RepositoryError> for TodoError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => match Uuid::parse_str(&id) {
                Ok(todo_id) => TodoError::NotFound { todo_id },
                Err(_) => TodoError::StoreUnavailable(format!("todo not found: {id}")),
            },
            other => TodoError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<BlobStoreError> for TodoError {
    fn from(err: BlobStoreError) -> Self {
        TodoError::StoreUnavailable(err.to_string())
    }
}
