use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::RepositoryError;
use crate::domain::question::ValidationError;
use crate::domain::quiz::QuizError;

/// API error type with HTTP status code and an internal detail
///
/// The detail is logged but never sent to the client; the response body is
/// always the fixed envelope `{success: false, error: <code>, message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// Creates a 405 Method Not Allowed error
    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, detail)
    }

    /// Creates a 422 Unprocessable Entity error
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Human-readable message sent for a status code
    pub fn public_message(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Resource Not Found",
            StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "Not Processable",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Anything outside the envelope classes is reported as a 500
        let status = match self.status {
            StatusCode::BAD_REQUEST
            | StatusCode::NOT_FOUND
            | StatusCode::METHOD_NOT_ALLOWED
            | StatusCode::UNPROCESSABLE_ENTITY => self.status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = %self.detail, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = %self.detail, "request rejected");
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": Self::public_message(status),
        }));

        (status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::not_found(err.to_string()),
            RepositoryError::InvalidReference(_) => Self::unprocessable(err.to_string()),
            RepositoryError::Database(_) => Self::internal_server_error(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        Self::unprocessable(err.to_string())
    }
}
