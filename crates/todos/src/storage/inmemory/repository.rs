//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

type TodoKey = (String, Uuid);

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<TodoKey, TodoItem>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn key(user_id: &str, todo_id: Uuid) -> TodoKey {
    (user_id.to_string(), todo_id)
}

fn not_found(todo_id: Uuid) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Todo",
        id: todo_id.to_string(),
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        todos.insert(key(&todo.user_id, todo.todo_id), todo.clone());
        Ok(todo.clone())
    }

    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn todo_exists(&self, user_id: &str, todo_id: Uuid) -> Result<bool> {
        let todos = self.todos.read().await;
        Ok(todos.contains_key(&key(user_id, todo_id)))
    }

    async fn update_todo(
        &self,
        user_id: &str,
        todo_id: Uuid,
        update: &TodoUpdate,
    ) -> Result<TodoItem> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| not_found(todo_id))?;
        todo.apply(update);
        Ok(todo.clone())
    }

    async fn set_attachment_url(&self, user_id: &str, todo_id: Uuid, url: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(&key(user_id, todo_id))
            .ok_or_else(|| not_found(todo_id))?;
        todo.attachment_url = Some(url.to_string());
        Ok(())
    }

    async fn delete_todo(&self, user_id: &str, todo_id: Uuid) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(&key(user_id, todo_id));
        Ok(())
    }
}
