use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the entire application
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum AppError {
    /// No usable credential on a protected request. All guard failure
    /// branches collapse to this variant at the HTTP boundary.
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// Login email/password mismatch. Unknown email and wrong password are
    /// deliberately indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a new unauthenticated error
    pub fn unauthenticated<T: Into<String>>(msg: T) -> Self {
        Self::Unauthenticated(msg.into())
    }

    /// Create a new validation error
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new not found error
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new storage error
    pub fn storage<T: Into<String>>(msg: T) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new config error
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal<T: Into<String>>(msg: T) -> Self {
        Self::Internal(msg.into())
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "auth",
            AppError::InvalidCredentials => "auth",
            AppError::DuplicateEmail => "conflict",
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::Storage(_) => "storage",
            AppError::Config(_) => "config",
            AppError::Internal(_) => "internal",
        }
    }

    /// The message shown to HTTP clients. Guard rejections and server-side
    /// faults get fixed wording; internal detail stays in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Unauthenticated(_) => "Authentication required".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::DuplicateEmail => "Email is already registered".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(_) | AppError::Config(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// Error body shape shared by every failing endpoint: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.public_message(),
        })
    }
}
