//! Data models and DTOs (Data Transfer Objects) for the link shortener.
//!
//! Contains structures for in-memory records and form/response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Domain Records
// ============================================================================

/// A shortened link stored in the link store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    /// The short code (6 lowercase-alphanumeric chars, unique key)
    pub code: String,
    /// The original long URL
    pub long_url: String,
    /// Id of the user who owns this link
    pub owner_id: String,
}

/// A registered user stored in the user store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// 6-char random token identifying the user
    pub id: String,
    /// Email address (unique, compared case-sensitively)
    pub email: String,
    /// Argon2id hash of the user's password
    pub password_hash: String,
}

// ============================================================================
// Form DTOs
// ============================================================================

/// Form body for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address. The original app accepts addresses like "a@a",
    /// so only the length is validated here.
    #[validate(length(max = 255, message = "Email is too long (max 255 characters)"))]
    pub email: String,

    #[validate(length(max = 128, message = "Password is too long (max 128 characters)"))]
    pub password: String,
}

/// Form body for logging in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(max = 255, message = "Email is too long (max 255 characters)"))]
    pub email: String,

    #[validate(length(max = 128, message = "Password is too long (max 128 characters)"))]
    pub password: String,
}

/// Form body for creating a new short link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkForm {
    /// The URL to shorten
    #[validate(length(max = 2048, message = "URL is too long (max 2048 characters)"))]
    pub long_url: String,
}

/// Form body for replacing a link's long URL
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLinkForm {
    /// The new long URL
    #[validate(length(max = 2048, message = "URL is too long (max 2048 characters)"))]
    pub long_url: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Generic API error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code (for programmatic handling)
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
