//! Todo API operations.

use reqwest::Method;
use uuid::Uuid;

use todos_core::todo::{
    find_todo, CreateTodoRequest, TodoItem, TodoResponse, TodosResponse, UpdateTodoRequest,
};

use super::TodosClient;
use crate::error::{ClientError, Result};

impl TodosClient {
    /// List the caller's todos.
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>> {
        let response = self.request(Method::GET, "/todos").send().await?;
        let body: TodosResponse = self.handle_response(response).await?;
        Ok(body.items)
    }

    /// Create a new todo.
    pub async fn create_todo(&self, req: &CreateTodoRequest) -> Result<TodoItem> {
        let response = self
            .request(Method::POST, "/todos")
            .json(req)
            .send()
            .await?;
        let body: TodoResponse = self.handle_response(response).await?;
        Ok(body.item)
    }

    /// Overwrite name, due date and done of a todo.
    pub async fn update_todo(&self, id: Uuid, req: &UpdateTodoRequest) -> Result<TodoItem> {
        let response = self
            .request(Method::PATCH, &format!("/todos/{}", id))
            .json(req)
            .send()
            .await?;
        let body: TodoResponse = self.handle_response(response).await?;
        Ok(body.item)
    }

    /// Flip the done flag of a todo, keeping its name and due date.
    pub async fn toggle_todo(&self, id: Uuid) -> Result<TodoItem> {
        let todos = self.list_todos().await?;
        let todo = find_todo(&todos, id).ok_or_else(|| ClientError::NotFound {
            resource: format!("todo {}", id),
        })?;

        self.update_todo(id, &UpdateTodoRequest::toggled(todo)).await
    }

    /// Delete a todo and its attachment.
    pub async fn delete_todo(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/todos/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
