use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todos_core::storage::todo_error_to_status_code;
use todos_core::todo::TodoError;

/// Handler error that wraps `anyhow::Error`.
///
/// Domain errors keep their message as a plain-text body and get their
/// status code from the core mapping functions.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = match self.0.downcast_ref::<TodoError>() {
            Some(todo_error) => todo_error_to_status_code(todo_error),
            None => 500,
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
