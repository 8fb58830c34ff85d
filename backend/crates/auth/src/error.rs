//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! The wire contract is a flat `{"error": message}` body with the mapped
//! status. Store and internal failures share one public message so nothing
//! leaks; unknown email and wrong password share one variant so account
//! existence cannot be probed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field is missing or empty
    #[error("All fields are required")]
    MissingFields,

    /// Email already belongs to another user
    #[error("Email is already in use")]
    DuplicateEmail,

    /// Unknown email or wrong password (deliberately conflated)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token failed signature or expiry checks
    #[error("Invalid or expired token")]
    TokenInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields | AuthError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::DuplicateEmail => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// The message sent to clients. Server-side detail never crosses here.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingFields => "All fields are required",
            AuthError::DuplicateEmail => "Email is already in use",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::TokenInvalid => "Invalid or expired token",
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::DuplicateEmail => {
                tracing::warn!("Signup attempt with existing email");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
