use crate::error::{ApiError, ErrorResponse};
use crate::models::Student;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

use super::parse_id;

/// GET /api/student/{id} handler - Retrieve a single student
#[utoipa::path(
    get,
    path = routes::STUDENT_ITEM,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 400, description = "Invalid id or student not found", body = ErrorResponse),
        (status = 500, description = "Stored collection is unreadable", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.students.get(id).await {
        Ok(student) => {
            tracing::info!("Successfully retrieved student with id: {}", id);
            Ok((StatusCode::OK, Json(student)))
        }
        Err(err) => {
            tracing::info!("Student lookup failed for id {}: {}", id, err);
            Err(err.into())
        }
    }
}
