//! Todo CRUD handlers.
//!
//! Each handler calls exactly one `TodoService` operation on behalf of the
//! authenticated caller.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use todos_core::todo::{
    CreateTodoRequest, TodoError, TodoResponse, TodosResponse, UpdateTodoRequest,
};

use crate::{extractors::AuthenticatedUser, handlers::AppError, state::AppState};

/// Unwrap a JSON body, turning a malformed or missing body into a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, TodoError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| TodoError::Validation(e.body_text()))
}

/// List the caller's todos (GET /todos).
pub async fn list_todos(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<TodosResponse>, AppError> {
    let items = state.service.list_todos(&user_id).await?;

    Ok(Json(TodosResponse { items }))
}

/// Create a todo (POST /todos).
pub async fn create_todo(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let request = json_body(payload)?;
    tracing::debug!(request = ?request, "Received create todo request");

    let item = state.service.create_todo(request, &user_id).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse { item })))
}

/// Update a todo (PATCH /todos/{id}).
pub async fn update_todo(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let request = json_body(payload)?;

    let item = state
        .service
        .update_todo(todo_id, &user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(TodoResponse { item })))
}

/// Delete a todo and its attachment (DELETE /todos/{id}).
pub async fn delete_todo(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.service.delete_todo(todo_id, &user_id).await?;

    Ok(StatusCode::ACCEPTED)
}
