//! Custom error types for the link shortener application.
//!
//! Implements proper error handling with automatic HTTP response conversion.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Application-level errors
#[derive(Debug)]
pub enum AppError {
    /// Short link or user was not found
    NotFound(String),
    /// Invalid input data
    ValidationError(String),
    /// No valid session on a protected endpoint
    Unauthorized(String),
    /// Authenticated but not the owner of the resource
    Forbidden(String),
    /// Email already registered
    EmailTaken(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::EmailTaken(msg) => write!(f, "Email already registered: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// ============================================================================
// Constructor Methods
// ============================================================================

impl AppError {
    /// Create a NotFound error for a short link
    pub fn link_not_found(code: &str) -> Self {
        AppError::NotFound(format!("Short link '{}' does not exist", code))
    }

    /// Create a NotFound error for a user id
    pub fn user_not_found(user_id: &str) -> Self {
        AppError::NotFound(format!("User with id '{}' not found", user_id))
    }

    /// Create a NotFound error for an email with no account
    pub fn email_not_found(email: &str) -> Self {
        AppError::NotFound(format!("No account registered for '{}'", email))
    }

    /// Create an Unauthorized error for a missing or invalid session
    pub fn no_session() -> Self {
        AppError::Unauthorized("No valid session. Log in first".into())
    }

    /// Create a Forbidden error for a resource ownership violation
    pub fn not_owner(code: &str) -> Self {
        AppError::Forbidden(format!(
            "You do not have permission to access short link '{}'",
            code
        ))
    }

    /// Create a Forbidden error for a failed password check
    pub fn bad_password() -> Self {
        AppError::Forbidden("Password does not match".into())
    }

    /// Create an EmailTaken error
    pub fn email_taken(email: &str) -> Self {
        AppError::EmailTaken(format!("Email '{}' is already registered", email))
    }

    /// Create a ValidationError with a message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    /// Create an InternalError with a message
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            // Duplicate registration is a 400 in this application, not a 409
            AppError::EmailTaken(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::ValidationError(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized(msg) => ("UNAUTHORIZED", msg.clone()),
            AppError::Forbidden(msg) => ("FORBIDDEN", msg.clone()),
            AppError::EmailTaken(msg) => ("EMAIL_TAKEN", msg.clone()),
            AppError::InternalError(msg) => ("INTERNAL_ERROR", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message, error_code))
    }
}

/// Convert template rendering errors to AppError
impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        log::error!("Template rendering error: {:?}", err);
        AppError::InternalError(format!("Template error: {}", err))
    }
}
