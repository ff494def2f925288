use crate::error::{ApiError, ErrorResponse};
use crate::models::Student;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/student/All Students handler - List every student in stored order
#[utoipa::path(
    get,
    path = "/api/student/All Students",
    responses(
        (status = 200, description = "All students", body = Vec<Student>),
        (status = 500, description = "Stored collection is unreadable", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Student>>), ApiError> {
    let students = state.students.list().await?;

    tracing::info!("Listed {} students", students.len());
    Ok((StatusCode::OK, Json(students)))
}
