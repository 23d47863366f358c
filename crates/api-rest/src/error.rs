//! API error type with JSON `{ "error": ... }` bodies.

use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medquery_core::MedicineError;

/// API-level errors with HTTP status mapping.
///
/// Store connectivity and query failures are not distinguished: both collapse to a
/// generic 500 after being logged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(name) => {
                tracing::debug!("no medicine named {:?}", name);
                (StatusCode::NOT_FOUND, "Medicine not found".to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!("Lookup error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorRes { error: message })).into_response()
    }
}

impl From<MedicineError> for ApiError {
    fn from(err: MedicineError) -> Self {
        match err {
            MedicineError::InvalidInput(detail) => ApiError::BadRequest(detail),
            MedicineError::NotFound(name) => ApiError::NotFound(name),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
