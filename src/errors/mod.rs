//! Error handling module for the Click Fit backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Validation error (missing/invalid request data)
    Validation(String),
    /// Uploaded file exceeds the per-file size limit
    FileTooLarge,
    /// Uploaded file is not an accepted image type
    UnsupportedFileType,
    /// Malformed multipart request body
    Multipart(String),
    /// Database error
    Database(String),
    /// Filesystem error
    Io(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType => StatusCode::BAD_REQUEST,
            AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error detail.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::FileTooLarge => "File size too large. Maximum size is 5MB".to_string(),
            AppError::UnsupportedFileType => "Only image files are allowed!".to_string(),
            AppError::Multipart(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Io(msg) => msg.clone(),
        }
    }

    /// Attach a route-specific envelope message (e.g. "Error adding user").
    pub fn with_message(self, message: &str) -> AppErrorWithMessage {
        AppErrorWithMessage {
            error: self,
            message: Some(message.to_string()),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("{}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        AppError::Io(format!("{}", err))
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        tracing::error!("Multipart error: {:?}", err);
        AppError::Multipart(format!("{}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: String, error: Option<String>) -> Self {
        Self {
            success: false,
            message,
            error,
        }
    }
}

/// Wrapper type pairing an error with the route-specific envelope message.
pub struct AppErrorWithMessage {
    pub error: AppError,
    pub message: Option<String>,
}

impl From<AppError> for AppErrorWithMessage {
    fn from(error: AppError) -> Self {
        Self {
            error,
            message: None,
        }
    }
}

impl IntoResponse for AppErrorWithMessage {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = match self.message {
            // Route-provided message; the underlying detail rides along.
            Some(message) => ErrorResponse::new(message, Some(self.error.detail())),
            // Client errors put the detail straight into `message`.
            None if status == StatusCode::BAD_REQUEST => {
                ErrorResponse::new(self.error.detail(), None)
            }
            None => ErrorResponse::new(
                "Something went wrong".to_string(),
                Some(self.error.detail()),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::FileTooLarge.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UnsupportedFileType.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Io("denied".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            AppError::FileTooLarge.detail(),
            "File size too large. Maximum size is 5MB"
        );
        assert_eq!(
            AppError::UnsupportedFileType.detail(),
            "Only image files are allowed!"
        );
    }
}
