use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
///
/// Classification itself never fails; these cover malformed requests and
/// lookups of things that do not exist.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Mood text is {length} characters, the limit is {max}")]
    MoodTooLong { length: usize, max: usize },

    #[error("Emotion '{0}' not found")]
    EmotionNotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AppError {
    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MoodTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::EmotionNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns a machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MoodTooLong { .. } => "MOOD_TOO_LONG",
            Self::EmotionNotFound(_) => "EMOTION_NOT_FOUND",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };

        // msgpack first, JSON if that fails
        match rmp_serde::to_vec_named(&body) {
            Ok(bytes) => (status, [("content-type", "application/msgpack")], bytes).into_response(),
            Err(_) => {
                let json = serde_json::to_string(&body).unwrap_or_else(|_| {
                    r#"{"error":{"code":"SERIALIZATION_ERROR","message":"Failed to serialize error"}}"#
                        .to_string()
                });
                (status, [("content-type", "application/json")], json).into_response()
            }
        }
    }
}
