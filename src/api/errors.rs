use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::repositories::items::StoreError;

/// Request-scoped failures. Everything except `InvalidBody` answers with a
/// plain-text explanation.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InvalidBody(JsonRejection),
}

impl ApiError {
    pub(crate) fn invalid_id() -> Self {
        Self::BadRequest("Invalid ID".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound("Item not found".to_string()),
            StoreError::Conflict(_) => {
                Self::Conflict("Item with this ID already exists".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                rejection.into_response()
            }
        }
    }
}
