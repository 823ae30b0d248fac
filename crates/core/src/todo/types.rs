use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo record.
///
/// The pair (`user_id`, `todo_id`) is the record's primary key. `todo_id` and
/// `created_at` are assigned once at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Owner identity (partition key).
    pub user_id: String,
    /// Record identifier (sort key).
    pub todo_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub due_date: NaiveDate,
    pub done: bool,
    /// Public URL of the attachment blob, set by the upload-URL operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Creates a new, not yet completed todo for the given owner.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: Uuid::new_v4(),
            created_at,
            name: name.into(),
            due_date,
            done: false,
            attachment_url: None,
        }
    }

    /// Sets a specific ID for this todo (useful for testing).
    pub fn with_id(mut self, todo_id: Uuid) -> Self {
        self.todo_id = todo_id;
        self
    }

    /// Sets the attachment URL.
    pub fn with_attachment_url(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// Applies an update, touching only the mutable fields.
    pub fn apply(&mut self, update: &TodoUpdate) {
        self.name = update.name.clone();
        self.due_date = update.due_date;
        self.done = update.done;
    }
}

/// The mutable field set of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub name: String,
    pub due_date: NaiveDate,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-03T09:15:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_todo_is_not_done() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let todo = TodoItem::new("u1", "buy milk", date, created_at());

        assert!(!todo.done);
        assert_eq!(todo.user_id, "u1");
        assert_eq!(todo.name, "buy milk");
        assert_eq!(todo.due_date, date);
        assert!(todo.attachment_url.is_none());
    }

    #[test]
    fn test_apply_keeps_identity_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut todo = TodoItem::new("u1", "buy milk", date, created_at())
            .with_attachment_url("https://bucket.s3.amazonaws.com/u1-x");
        let before = todo.clone();

        todo.apply(&TodoUpdate {
            name: "buy oat milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            done: true,
        });

        assert_eq!(todo.name, "buy oat milk");
        assert_eq!(todo.due_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(todo.done);
        assert_eq!(todo.todo_id, before.todo_id);
        assert_eq!(todo.user_id, before.user_id);
        assert_eq!(todo.created_at, before.created_at);
        assert_eq!(todo.attachment_url, before.attachment_url);
    }

    #[test]
    fn test_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap();
        let todo = TodoItem::new("u1", "buy milk", date, created_at()).with_id(id);

        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["todoId"], "550e8400-e29b-41d4-a716-446655440003");
        assert_eq!(json["dueDate"], "2024-01-10");
        assert_eq!(json["done"], false);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-01-03T09:15:00"));
        assert!(json.get("attachmentUrl").is_none());
    }
}
