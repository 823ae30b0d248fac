mod error;
mod operations;
mod requests;
mod sorting;
mod types;

pub use error::TodoError;
pub use operations::{
    attachment_key, default_due_date, find_todo, s3_public_url, validate_name,
    DEFAULT_DUE_IN_DAYS,
};
pub use requests::{
    CreateTodoRequest, TodoResponse, TodosResponse, UpdateTodoRequest, UploadUrlResponse,
};
pub use sorting::{arrange_todos, filter_todos, sort_todos, SortBy, SortOrder, StatusFilter};
pub use types::{TodoItem, TodoUpdate};
