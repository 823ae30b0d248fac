use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use todos_core::todo::UploadUrlResponse;

use crate::{extractors::AuthenticatedUser, handlers::AppError, state::AppState};

/// Issue a presigned attachment upload URL (POST /todos/{id}/attachment).
pub async fn generate_upload_url(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let upload_url = state
        .service
        .generate_upload_url(todo_id, &user_id)
        .await?;

    Ok(Json(UploadUrlResponse { upload_url }))
}
