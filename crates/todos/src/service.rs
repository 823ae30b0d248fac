//! Todo service.
//!
//! Orchestrates the record store and the attachment store. Handlers call one
//! service operation per request.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use todos_core::storage::TodoRepository;
use todos_core::todo::{CreateTodoRequest, TodoError, TodoItem, UpdateTodoRequest};

use crate::attachments::Attachments;

/// Todo operations scoped to a single owner per call.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
    attachments: Attachments,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>, attachments: Attachments) -> Self {
        Self { repo, attachments }
    }

    /// Creates a todo owned by `user_id` with a fresh id and creation time.
    pub async fn create_todo(
        &self,
        request: CreateTodoRequest,
        user_id: &str,
    ) -> Result<TodoItem, TodoError> {
        let todo = request.into_todo(user_id, Utc::now())?;
        let todo = self.repo.create_todo(&todo).await?;

        tracing::info!(user_id, todo_id = %todo.todo_id, "created todo");

        Ok(todo)
    }

    /// Lists every todo owned by `user_id`.
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>, TodoError> {
        Ok(self.repo.get_todos_by_user(user_id).await?)
    }

    /// Overwrites name, due date and done of an existing todo.
    pub async fn update_todo(
        &self,
        todo_id: Uuid,
        user_id: &str,
        request: UpdateTodoRequest,
    ) -> Result<TodoItem, TodoError> {
        let update = request.into_update()?;

        if !self.repo.todo_exists(user_id, todo_id).await? {
            return Err(TodoError::NotFound { todo_id });
        }

        let todo = self.repo.update_todo(user_id, todo_id, &update).await?;

        tracing::info!(user_id, %todo_id, done = todo.done, "updated todo");

        Ok(todo)
    }

    /// Deletes a todo and then its attachment.
    ///
    /// A failed attachment delete is logged and the blob is left orphaned.
    pub async fn delete_todo(&self, todo_id: Uuid, user_id: &str) -> Result<(), TodoError> {
        self.repo.delete_todo(user_id, todo_id).await?;

        if let Err(e) = self.attachments.delete_attachment(user_id, todo_id).await {
            tracing::error!(
                user_id,
                %todo_id,
                error = %e,
                "failed to delete attachment, blob orphaned"
            );
        }

        tracing::info!(user_id, %todo_id, "deleted todo");

        Ok(())
    }

    /// Returns a presigned upload URL for the todo's attachment.
    pub async fn generate_upload_url(
        &self,
        todo_id: Uuid,
        user_id: &str,
    ) -> Result<String, TodoError> {
        self.attachments.issue_upload_url(user_id, todo_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use todos_core::storage::{self, BlobStore, BlobStoreError, RepositoryError};
    use todos_core::todo::TodoUpdate;

    use super::*;
    use crate::storage::inmemory::{InMemoryBlobStore, InMemoryRepository};

    fn service_with(
        repo: Arc<dyn TodoRepository>,
        blobs: Arc<dyn BlobStore>,
    ) -> TodoService {
        let attachments = Attachments::new(repo.clone(), blobs, Duration::from_secs(300));
        TodoService::new(repo, attachments)
    }

    fn setup() -> (TodoService, Arc<InMemoryBlobStore>) {
        let blobs = Arc::new(InMemoryBlobStore::new("todos-attachments"));
        let service = service_with(Arc::new(InMemoryRepository::new()), blobs.clone());
        (service, blobs)
    }

    fn jan_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn buy_milk() -> CreateTodoRequest {
        CreateTodoRequest::new("buy milk").with_due_date(jan_10())
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (service, _) = setup();

        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        assert_eq!(created.user_id, "u1");
        assert_eq!(created.name, "buy milk");
        assert_eq!(created.due_date, jan_10());
        assert!(!created.done);

        let todos = service.list_todos("u1").await.unwrap();
        assert_eq!(todos, vec![created]);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (service, _) = setup();

        let result = service.create_todo(CreateTodoRequest::new("  "), "u1").await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert!(service.list_todos("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let (service, _) = setup();
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        let updated = service
            .update_todo(
                created.todo_id,
                "u1",
                UpdateTodoRequest {
                    name: "buy oat milk".to_string(),
                    due_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
                    done: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.todo_id, created.todo_id);
        assert_eq!(updated.user_id, created.user_id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "buy oat milk");
        assert!(updated.done);
    }

    #[tokio::test]
    async fn test_update_missing_todo() {
        let (service, _) = setup();
        let todo_id = Uuid::new_v4();

        let result = service
            .update_todo(
                todo_id,
                "u1",
                UpdateTodoRequest {
                    name: "x".to_string(),
                    due_date: jan_10(),
                    done: false,
                },
            )
            .await;

        assert_eq!(result, Err(TodoError::NotFound { todo_id }));
    }

    #[tokio::test]
    async fn test_generate_upload_url_missing_todo() {
        let (service, blobs) = setup();
        let todo_id = Uuid::new_v4();

        let result = service.generate_upload_url(todo_id, "u1").await;

        assert_eq!(result, Err(TodoError::InvalidReference { todo_id }));
        assert!(blobs.presigned_keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_issues_blob_delete() {
        let (service, blobs) = setup();
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        service.delete_todo(created.todo_id, "u1").await.unwrap();

        assert_eq!(
            blobs.deleted_keys().await,
            vec![format!("u1-{}", created.todo_id)]
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (service, _) = setup();
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        service.delete_todo(created.todo_id, "u1").await.unwrap();
        service.delete_todo(created.todo_id, "u1").await.unwrap();

        assert!(service.list_todos("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let (service, _) = setup();

        let created = service.create_todo(buy_milk(), "u1").await.unwrap();
        assert!(!created.done);
        assert_eq!(created.due_date, jan_10());

        let updated = service
            .update_todo(
                created.todo_id,
                "u1",
                UpdateTodoRequest {
                    name: "buy milk".to_string(),
                    due_date: jan_10(),
                    done: true,
                },
            )
            .await
            .unwrap();
        assert!(updated.done);

        service.delete_todo(created.todo_id, "u1").await.unwrap();
        assert!(service.list_todos("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_owners_are_isolated() {
        let (service, blobs) = setup();
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();
        let request = UpdateTodoRequest::toggled(&created);

        assert!(service.list_todos("u2").await.unwrap().is_empty());
        assert_eq!(
            service.update_todo(created.todo_id, "u2", request).await,
            Err(TodoError::NotFound {
                todo_id: created.todo_id
            })
        );
        assert_eq!(
            service.generate_upload_url(created.todo_id, "u2").await,
            Err(TodoError::InvalidReference {
                todo_id: created.todo_id
            })
        );

        service.delete_todo(created.todo_id, "u2").await.unwrap();
        assert_eq!(service.list_todos("u1").await.unwrap(), vec![created.clone()]);
        assert_eq!(
            blobs.deleted_keys().await,
            vec![format!("u2-{}", created.todo_id)]
        );
    }

    /// Repository whose deletes always fail.
    struct FailingDeleteRepository {
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl TodoRepository for FailingDeleteRepository {
        async fn create_todo(&self, todo: &TodoItem) -> storage::Result<TodoItem> {
            self.inner.create_todo(todo).await
        }

        async fn get_todos_by_user(&self, user_id: &str) -> storage::Result<Vec<TodoItem>> {
            self.inner.get_todos_by_user(user_id).await
        }

        async fn todo_exists(&self, user_id: &str, todo_id: Uuid) -> storage::Result<bool> {
            self.inner.todo_exists(user_id, todo_id).await
        }

        async fn update_todo(
            &self,
            user_id: &str,
            todo_id: Uuid,
            update: &TodoUpdate,
        ) -> storage::Result<TodoItem> {
            self.inner.update_todo(user_id, todo_id, update).await
        }

        async fn set_attachment_url(
            &self,
            user_id: &str,
            todo_id: Uuid,
            url: &str,
        ) -> storage::Result<()> {
            self.inner.set_attachment_url(user_id, todo_id, url).await
        }

        async fn delete_todo(&self, _user_id: &str, _todo_id: Uuid) -> storage::Result<()> {
            Err(RepositoryError::QueryFailed("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_record_delete_skips_blob_delete() {
        let blobs = Arc::new(InMemoryBlobStore::new("todos-attachments"));
        let repo = Arc::new(FailingDeleteRepository {
            inner: InMemoryRepository::new(),
        });
        let service = service_with(repo, blobs.clone());
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        let result = service.delete_todo(created.todo_id, "u1").await;

        assert!(matches!(result, Err(TodoError::StoreUnavailable(_))));
        assert!(blobs.deleted_keys().await.is_empty());
    }

    /// Blob store whose deletes always fail.
    struct FailingBlobStore;

    #[async_trait]
    impl BlobStore for FailingBlobStore {
        async fn presign_upload(
            &self,
            key: &str,
            _expires_in: Duration,
        ) -> Result<String, BlobStoreError> {
            Ok(format!("memory://failing/{key}"))
        }

        fn public_url(&self, key: &str) -> String {
            format!("memory://failing/{key}")
        }

        async fn delete_blob(&self, _key: &str) -> Result<(), BlobStoreError> {
            Err(BlobStoreError::RequestFailed("access denied".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_blob_delete_still_succeeds() {
        let service = service_with(
            Arc::new(InMemoryRepository::new()),
            Arc::new(FailingBlobStore),
        );
        let created = service.create_todo(buy_milk(), "u1").await.unwrap();

        service.delete_todo(created.todo_id, "u1").await.unwrap();

        assert!(service.list_todos("u1").await.unwrap().is_empty());
    }

    /// Repository where every record passes the existence check and is gone
    /// by the time it is written.
    struct VanishingRepository;

    #[async_trait]
    impl TodoRepository for VanishingRepository {
        async fn create_todo(&self, todo: &TodoItem) -> storage::Result<TodoItem> {
            Ok(todo.clone())
        }

        async fn get_todos_by_user(&self, _user_id: &str) -> storage::Result<Vec<TodoItem>> {
            Ok(Vec::new())
        }

        async fn todo_exists(&self, _user_id: &str, _todo_id: Uuid) -> storage::Result<bool> {
            Ok(true)
        }

        async fn update_todo(
            &self,
            _user_id: &str,
            todo_id: Uuid,
            _update: &TodoUpdate,
        ) -> storage::Result<TodoItem> {
            Err(RepositoryError::NotFound {
                entity_type: "Todo",
                id: todo_id.to_string(),
            })
        }

        async fn set_attachment_url(
            &self,
            _user_id: &str,
            todo_id: Uuid,
            _url: &str,
        ) -> storage::Result<()> {
            Err(RepositoryError::NotFound {
                entity_type: "Todo",
                id: todo_id.to_string(),
            })
        }

        async fn delete_todo(&self, _user_id: &str, _todo_id: Uuid) -> storage::Result<()> {
            Ok(())
        }
    }

    fn vanishing_service() -> TodoService {
        service_with(
            Arc::new(VanishingRepository),
            Arc::new(InMemoryBlobStore::new("todos-attachments")),
        )
    }

    #[tokio::test]
    async fn test_update_of_todo_deleted_after_check() {
        let service = vanishing_service();
        let todo_id = Uuid::new_v4();

        let result = service
            .update_todo(
                todo_id,
                "u1",
                UpdateTodoRequest {
                    name: "buy milk".to_string(),
                    due_date: jan_10(),
                    done: true,
                },
            )
            .await;

        assert_eq!(result, Err(TodoError::NotFound { todo_id }));
    }

    #[tokio::test]
    async fn test_upload_url_for_todo_deleted_after_check() {
        let service = vanishing_service();
        let todo_id = Uuid::new_v4();

        let result = service.generate_upload_url(todo_id, "u1").await;

        assert_eq!(result, Err(TodoError::InvalidReference { todo_id }));
    }
}
