use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::students::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Business rule violations surface as 400 with the store's message;
/// storage failures surface as 500.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter is not an integer id
    InvalidId(String),
    /// Request body is not a valid student
    InvalidBody(JsonRejection),
    /// Student collection operation failed
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid student id: expected an integer, got '{}'", id),
            ),
            ApiError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", rejection.body_text()),
            ),
            ApiError::Store(
                err @ (StoreError::AgeLimit
                | StoreError::AlreadyExists(_)
                | StoreError::NotFound(_)),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Store(err) => {
                tracing::error!("Storage error: {:#}", anyhow::Error::from(err));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error: student collection could not be read or written".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_business_errors_are_bad_request() {
        let (status, body) = render(StoreError::NotFound(3).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Student with id 3 not found");

        let (status, body) = render(StoreError::AgeLimit.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Students age max is 18");
    }

    #[tokio::test]
    async fn test_corrupt_store_is_internal_error() {
        let decode = serde_json::from_slice::<Vec<u8>>(b"nope").unwrap_err();
        let (status, body) = render(StoreError::Decode(decode).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("Storage error"));
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let (status, body) = render(ApiError::InvalidId("abc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("Invalid student id"));
        assert!(body.error.contains("abc"));
    }
}
