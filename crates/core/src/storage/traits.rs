use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::todo::{TodoItem, TodoUpdate};

use super::{BlobStoreError, Result};

/// Repository for todo records keyed by (`user_id`, `todo_id`).
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a todo unconditionally and returns it.
    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem>;

    /// Gets all todos owned by a user, in store order.
    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Returns true if a todo with this exact key exists.
    async fn todo_exists(&self, user_id: &str, todo_id: Uuid) -> Result<bool>;

    /// Overwrites name, due date and done, returning the updated todo.
    ///
    /// Fails with `NotFound` if the todo is absent at write time.
    async fn update_todo(
        &self,
        user_id: &str,
        todo_id: Uuid,
        update: &TodoUpdate,
    ) -> Result<TodoItem>;

    /// Sets the attachment URL of an existing todo.
    ///
    /// Fails with `NotFound` if the todo is absent at write time.
    async fn set_attachment_url(&self, user_id: &str, todo_id: Uuid, url: &str) -> Result<()>;

    /// Deletes a todo. Deleting a missing todo is not an error.
    async fn delete_todo(&self, user_id: &str, todo_id: Uuid) -> Result<()>;
}

/// Object storage for todo attachments.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Creates a time-limited URL that allows a single upload to `key`.
    async fn presign_upload(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> std::result::Result<String, BlobStoreError>;

    /// Returns the public-read URL of `key`.
    fn public_url(&self, key: &str) -> String;

    /// Deletes the blob at `key`. Deleting a missing blob is not an error.
    async fn delete_blob(&self, key: &str) -> std::result::Result<(), BlobStoreError>;
}
