use serde::Serialize;
use thiserror::Error;

use crate::shared::config::AppConfig;

/// Failure classification carried as data from the point of failure.
///
/// The boundary maps each kind to a status code; nothing inspects message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Caller-facing message, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message)
            | AppError::InternalError(message) => message,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Project the error into the JSON body an HTTP boundary sends back.
    ///
    /// Failures are logged in development so they are never silently swallowed
    /// while iterating locally.
    pub fn to_response(&self, config: &AppConfig) -> ErrorResponse {
        if config.is_development() {
            log::error!("[{}] {}", self.code(), self.message());
        }

        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.message().to_string(),
                status_code: self.status_code(),
            },
        }
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::ValidationError(format!("Invalid date/time: {}", err))
    }
}

/// Error envelope: `{"error": {"code", "message", "statusCode"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub status_code: u16,
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
