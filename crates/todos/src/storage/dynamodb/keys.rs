//! DynamoDB key and attribute names.
//!
//! The table uses `userId` as partition key and `todoId` as sort key. The
//! list query runs against a secondary index keyed by `userId`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use uuid::Uuid;

// ============================================================================
// Attribute names
// ============================================================================

pub const USER_ID: &str = "userId";
pub const TODO_ID: &str = "todoId";
pub const CREATED_AT: &str = "createdAt";
pub const NAME: &str = "name";
pub const DUE_DATE: &str = "dueDate";
pub const DONE: &str = "done";
pub const ATTACHMENT_URL: &str = "attachmentUrl";

// ============================================================================
// Expressions
// ============================================================================

/// Guard that turns a write on a missing key into a conditional check failure.
pub const TODO_EXISTS_CONDITION: &str = "attribute_exists(todoId)";

/// Key condition for listing a user's todos on the index.
pub const BY_USER_KEY_CONDITION: &str = "userId = :userId";

/// `name` is a DynamoDB reserved word, hence the `#name` placeholder.
pub const UPDATE_FIELDS_EXPRESSION: &str = "SET #name = :name, dueDate = :dueDate, done = :done";

pub const SET_ATTACHMENT_EXPRESSION: &str = "SET attachmentUrl = :attachmentUrl";

/// Generate the primary key of a todo.
pub fn todo_key(user_id: &str, todo_id: Uuid) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(user_id.to_string())),
        (TODO_ID.to_string(), AttributeValue::S(todo_id.to_string())),
    ])
}
