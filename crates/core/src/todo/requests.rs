//! API request and response types for todo operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::TodoError;
use super::operations::{default_due_date, validate_name};
use super::types::{TodoItem, TodoUpdate};

/// Request payload for creating a new todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    /// Defaults to one week after creation when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl CreateTodoRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Validate and convert into a fresh todo owned by `user_id`.
    pub fn into_todo(
        self,
        user_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<TodoItem, TodoError> {
        validate_name(&self.name)?;
        let due_date = self.due_date.unwrap_or_else(|| default_due_date(now));
        Ok(TodoItem::new(user_id, self.name, due_date, now))
    }
}

/// Request payload for updating a todo. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: String,
    pub due_date: NaiveDate,
    pub done: bool,
}

impl UpdateTodoRequest {
    /// Validate and convert into the store-level update.
    pub fn into_update(self) -> Result<TodoUpdate, TodoError> {
        validate_name(&self.name)?;
        Ok(TodoUpdate {
            name: self.name,
            due_date: self.due_date,
            done: self.done,
        })
    }

    /// Build a request that flips `done` and keeps the other fields.
    pub fn toggled(todo: &TodoItem) -> Self {
        Self {
            name: todo.name.clone(),
            due_date: todo.due_date,
            done: !todo.done,
        }
    }
}

/// Response body carrying a single todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub item: TodoItem,
}

/// Response body carrying a list of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosResponse {
    pub items: Vec<TodoItem>,
}

/// Response body carrying a presigned upload URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}
