//! Shared utilities used across all service domains.
//!
//! Contains code/id generation and password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use nanoid::nanoid;
use rand::Rng;

use crate::constants::{SHORT_CODE_ALPHABET, USER_ID_LENGTH};
use crate::errors::AppError;

/// Generate a random short code using nanoid.
///
/// No uniqueness guarantee; callers retry against the store on collision.
pub fn generate_short_code(length: usize) -> String {
    nanoid!(length, &SHORT_CODE_ALPHABET)
}

/// Generate a random 6-char user id
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..USER_ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..SHORT_CODE_ALPHABET.len());
            SHORT_CODE_ALPHABET[idx]
        })
        .collect()
}

/// Hash a password with Argon2id, producing a PHC string
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored Argon2id hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is malformed: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
