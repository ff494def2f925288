use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/student/Init Dummy Data handler - Replace the collection with sample students
///
/// Whatever was stored before is discarded.
#[utoipa::path(
    post,
    path = "/api/student/Init Dummy Data",
    responses(
        (status = 200, description = "Sample students written", body = String),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn seed_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    state.students.seed_dummy_data().await?;

    tracing::info!("Initialized student collection with dummy data");
    Ok((StatusCode::OK, Json("Added dummy data")))
}
