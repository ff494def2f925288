use crate::error::{ApiError, ErrorResponse};
use crate::models::Student;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

use super::parse_id;

/// DELETE /api/student/{id} handler - Remove a student
#[utoipa::path(
    delete,
    path = routes::STUDENT_ITEM,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student removed; remaining list returned", body = Vec<Student>),
        (status = 400, description = "Invalid id or student not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Vec<Student>>), ApiError> {
    let id = parse_id(&id_str)?;

    let students = state.students.delete(id).await.inspect_err(|err| {
        tracing::info!("Delete failed for id {}: {}", id, err);
    })?;

    tracing::info!("Successfully deleted student with id: {}", id);
    Ok((StatusCode::OK, Json(students)))
}
