//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

use super::conversions::{format_date, item_to_todo, todo_to_item};
use super::error::{store_error, update_error};
use super::keys;

/// DynamoDB-based todo repository.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given client, table and user index.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn create_todo(&self, todo: &TodoItem) -> Result<TodoItem> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(|e| store_error("PutItem", e))?;

        Ok(todo.clone())
    }

    async fn get_todos_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let mut todos = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.index_name)
                .key_condition_expression(keys::BY_USER_KEY_CONDITION)
                .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| store_error("Query", e))?;

            for item in result.items.unwrap_or_default() {
                todos.push(item_to_todo(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(todos)
    }

    async fn todo_exists(&self, user_id: &str, todo_id: Uuid) -> Result<bool> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .projection_expression(keys::TODO_ID)
            .send()
            .await
            .map_err(|e| store_error("GetItem", e))?;

        Ok(result.item.is_some())
    }

    async fn update_todo(
        &self,
        user_id: &str,
        todo_id: Uuid,
        update: &TodoUpdate,
    ) -> Result<TodoItem> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .condition_expression(keys::TODO_EXISTS_CONDITION)
            .update_expression(keys::UPDATE_FIELDS_EXPRESSION)
            .expression_attribute_names("#name", keys::NAME)
            .expression_attribute_values(":name", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(
                ":dueDate",
                AttributeValue::S(format_date(update.due_date)),
            )
            .expression_attribute_values(":done", AttributeValue::Bool(update.done))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| update_error(e, todo_id))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData("UpdateItem returned no attributes".to_string())
        })?;

        item_to_todo(&attributes)
    }

    async fn set_attachment_url(&self, user_id: &str, todo_id: Uuid, url: &str) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .condition_expression(keys::TODO_EXISTS_CONDITION)
            .update_expression(keys::SET_ATTACHMENT_EXPRESSION)
            .expression_attribute_values(":attachmentUrl", AttributeValue::S(url.to_string()))
            .send()
            .await
            .map_err(|e| update_error(e, todo_id))?;

        Ok(())
    }

    async fn delete_todo(&self, user_id: &str, todo_id: Uuid) -> Result<()> {
        // Unconditional, so deleting a missing todo succeeds.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(user_id, todo_id)))
            .send()
            .await
            .map_err(|e| store_error("DeleteItem", e))?;

        Ok(())
    }
}
