//! Error types for the CuraVyom API.
//!
//! Handlers return [`ServerResult`]; every [`ServerError`] renders as a JSON
//! body `{"status": "error", "detail": ...}` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed request (missing multipart field, unreadable body).
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Well-formed request with unacceptable field values.
    #[error("Invalid value for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Upload body over the configured limit.
    #[error("Upload too large: limit is {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ServerError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        let body = Json(json!({
            "status": "error",
            "detail": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServerError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::validation("email", "must not be empty").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServerError::PayloadTooLarge { limit: 10 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ServerError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_format() {
        let msg = ServerError::validation("email", "must not be empty").to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("must not be empty"));
    }
}
