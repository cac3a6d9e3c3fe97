//! Application-wide constants.
//!
//! Centralizes magic numbers and strings for better maintainability.

// ============================================================================
// Short Code Constants
// ============================================================================

/// Characters used for generating short codes and user ids (lowercase alphanumeric)
pub const SHORT_CODE_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default length of generated short codes
pub const DEFAULT_SHORT_CODE_LENGTH: usize = 6;

/// Length of generated user ids
pub const USER_ID_LENGTH: usize = 6;

/// Maximum retry attempts when generating a unique short code or user id
pub const MAX_CODE_GENERATION_RETRIES: u32 = 10;

// ============================================================================
// Session Constants
// ============================================================================

/// Name of the signed session cookie carrying the user id
pub const SESSION_COOKIE_NAME: &str = "user_id";

/// Minimum accepted length for the session signing secret
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;
