//! Pure functions for mapping errors to HTTP status codes.
//!
//! Repository failures reach handlers as [`TodoError`], so this is the only
//! mapping the HTTP layer needs.

use crate::todo::TodoError;

/// Maps a [`TodoError`] to an HTTP status code.
///
/// Every error caused by the request maps to 400 (Bad Request), including a
/// missing record. Store failures map to 500 (Internal Server Error).
///
/// # Examples
///
/// ```
/// use todos_core::storage::todo_error_to_status_code;
/// use todos_core::todo::TodoError;
///
/// let error = TodoError::StoreUnavailable("timeout".to_string());
/// assert_eq!(todo_error_to_status_code(&error), 500);
/// ```
pub fn todo_error_to_status_code(error: &TodoError) -> u16 {
    match error {
        TodoError::NotFound { .. } => 400,
        TodoError::InvalidReference { .. } => 400,
        TodoError::Validation(_) => 400,
        TodoError::StoreUnavailable(_) => 500,
    }
}
