//! Attachment handling for todos.
//!
//! Attachments live in the blob store under `{userId}-{todoId}`. Clients get a
//! presigned upload URL and send the bytes directly; the todo record keeps the
//! public-read URL of the blob.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use todos_core::storage::{BlobStore, BlobStoreError, TodoRepository};
use todos_core::todo::{attachment_key, TodoError};

/// Issues upload URLs and removes attachment blobs.
#[derive(Clone)]
pub struct Attachments {
    repo: Arc<dyn TodoRepository>,
    blobs: Arc<dyn BlobStore>,
    url_expiration: Duration,
}

impl Attachments {
    pub fn new(
        repo: Arc<dyn TodoRepository>,
        blobs: Arc<dyn BlobStore>,
        url_expiration: Duration,
    ) -> Self {
        Self {
            repo,
            blobs,
            url_expiration,
        }
    }

    /// Returns a presigned upload URL for the todo's attachment.
    ///
    /// The todo's `attachmentUrl` is set to the blob's public URL before the
    /// upload URL is handed out.
    pub async fn issue_upload_url(
        &self,
        user_id: &str,
        todo_id: Uuid,
    ) -> Result<String, TodoError> {
        if !self.repo.todo_exists(user_id, todo_id).await? {
            return Err(TodoError::InvalidReference { todo_id });
        }

        let key = attachment_key(user_id, todo_id);
        let upload_url = self.blobs.presign_upload(&key, self.url_expiration).await?;
        let public_url = self.blobs.public_url(&key);

        self.repo
            .set_attachment_url(user_id, todo_id, &public_url)
            .await
            .map_err(|e| match TodoError::from(e) {
                // Deleted between the check and the write.
                TodoError::NotFound { todo_id } => TodoError::InvalidReference { todo_id },
                other => other,
            })?;

        tracing::debug!(user_id, %todo_id, %key, "issued attachment upload url");

        Ok(upload_url)
    }

    /// Deletes the todo's attachment blob. A missing blob is not an error.
    pub async fn delete_attachment(
        &self,
        user_id: &str,
        todo_id: Uuid,
    ) -> Result<(), BlobStoreError> {
        let key = attachment_key(user_id, todo_id);
        self.blobs.delete_blob(&key).await
    }
}
