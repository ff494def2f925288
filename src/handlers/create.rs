use crate::error::{ApiError, ErrorResponse};
use crate::models::Student;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /api/student handler - Add a new student
///
/// Rejects a duplicate id, then an age above the cap. Returns the full
/// collection after the insert.
#[utoipa::path(
    post,
    path = routes::STUDENTS,
    request_body = Student,
    responses(
        (status = 200, description = "Student added; full list returned", body = Vec<Student>),
        (status = 400, description = "Duplicate id, age above 18, or invalid JSON", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "student"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Student>>), ApiError> {
    let Json(student) = payload?;
    let id = student.id;

    let students = state.students.create(student).await.inspect_err(|err| {
        tracing::info!("Rejected student with id {}: {}", id, err);
    })?;

    tracing::info!("Successfully added student with id: {}", id);
    Ok((StatusCode::OK, Json(students)))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorResponse;
    use crate::handlers::test_support::{body_json, send, setup_test_app, student};
    use crate::models::Student;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let (app, _) = setup_test_app();

        let response = send(&app, "POST", "/api/student", Some(&student(1, 16))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let students: Vec<Student> = body_json(response).await;
        assert_eq!(students, vec![student(1, 16)]);
    }

    #[tokio::test]
    async fn test_create_endpoint_over_age() {
        let (app, _) = setup_test_app();

        let response = send(&app, "POST", "/api/student", Some(&student(1, 19))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = body_json(response).await;
        assert_eq!(error_response.error, "Students age max is 18");

        let list = send(&app, "GET", "/api/student/All%20Students", None).await;
        let students: Vec<Student> = body_json(list).await;
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_create_endpoint_duplicate() {
        let (app, _) = setup_test_app();
        send(&app, "POST", "/api/student", Some(&student(1, 16))).await;

        let response = send(&app, "POST", "/api/student", Some(&student(1, 17))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = body_json(response).await;
        assert_eq!(error_response.error, "Student with id 1 is already exists");
    }

    #[tokio::test]
    async fn test_create_endpoint_legacy_field_names() {
        let (app, _) = setup_test_app();
        let payload = serde_json::json!({
            "id": 8,
            "firstName": "Dan",
            "lastName": "Sagir",
            "age": 18,
            "gradesAvg": 100,
            "schoolName": "Alon",
            "schoolAdress": "Migdal 46"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/student")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let students: Vec<Student> = body_json(response).await;
        assert_eq!(students[0].grades_average, 100.0);
        assert_eq!(students[0].school_address, "Migdal 46");
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/student")
                    .header("content-type", "application/json")
                    .body(Body::from("{invalid json}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = body_json(response).await;
        assert!(error_response.error.contains("JSON parse error"));
    }
}
