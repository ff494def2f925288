use crate::error::{ApiError, ErrorResponse};
use crate::models::Student;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// PUT /api/student handler - Replace every field of an existing student except its id
///
/// The age cap applied on create is not applied here.
#[utoipa::path(
    put,
    path = routes::STUDENTS,
    request_body = Student,
    responses(
        (status = 200, description = "Student updated; full list returned", body = Vec<Student>),
        (status = 400, description = "Student not found or invalid JSON", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Student>>), ApiError> {
    let Json(student) = payload?;
    let id = student.id;

    let students = state.students.update(student).await.inspect_err(|err| {
        tracing::info!("Update failed for id {}: {}", id, err);
    })?;

    tracing::info!("Successfully updated student with id: {}", id);
    Ok((StatusCode::OK, Json(students)))
}
