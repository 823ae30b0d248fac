use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use super::error::TodoError;
use super::types::TodoItem;

/// Days added to the creation date when no due date is supplied.
pub const DEFAULT_DUE_IN_DAYS: i64 = 7;

/// Returns the default due date for a todo created at `now`.
pub fn default_due_date(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::days(DEFAULT_DUE_IN_DAYS)).date_naive()
}

/// Validates a todo name.
pub fn validate_name(name: &str) -> Result<(), TodoError> {
    if name.trim().is_empty() {
        return Err(TodoError::Validation("name is required".to_string()));
    }
    Ok(())
}

/// Derives the blob key for a todo's attachment.
///
/// Pattern: `<user_id>-<todo_id>`. Existing attachments are stored under this
/// key, so the format must not change.
pub fn attachment_key(user_id: &str, todo_id: Uuid) -> String {
    format!("{user_id}-{todo_id}")
}

/// Returns the public-read URL for a key in an S3 bucket.
pub fn s3_public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}

/// Finds a todo by ID.
pub fn find_todo(todos: &[TodoItem], todo_id: Uuid) -> Option<&TodoItem> {
    todos.iter().find(|todo| todo.todo_id == todo_id)
}
