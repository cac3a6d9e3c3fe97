//! User registration and credential verification services.

use super::helpers::{generate_user_id, hash_password, verify_password};
use crate::constants::MAX_CODE_GENERATION_RETRIES;
use crate::errors::AppError;
use crate::models::User;
use crate::store::AppStore;

/// Register a new user.
///
/// Rejects empty email/password and already-registered emails with a 400;
/// otherwise hashes the password, generates an id, and stores the record.
pub fn register_user(store: &AppStore, email: &str, password: &str) -> Result<User, AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Email and password must not be empty"));
    }

    if store.users.find_by_email(email).is_some() {
        return Err(AppError::email_taken(email));
    }

    let password_hash = hash_password(password)?;

    let mut id = generate_user_id();
    let mut attempts = 0;
    while store.users.contains(&id) {
        attempts += 1;
        if attempts >= MAX_CODE_GENERATION_RETRIES {
            return Err(AppError::internal("Failed to generate a unique user id"));
        }
        id = generate_user_id();
    }

    let user = User {
        id: id.clone(),
        email: email.to_string(),
        password_hash,
    };
    store.users.insert(user.clone());

    log::info!("Registered new user: {} (id: {})", email, id);

    Ok(user)
}

/// Verify a user's credentials.
///
/// An unknown email is NotFound; a known email with a non-matching password
/// is Forbidden. On success the caller establishes the session.
pub fn authenticate_user(store: &AppStore, email: &str, password: &str) -> Result<User, AppError> {
    let user = store
        .users
        .find_by_email(email)
        .ok_or_else(|| AppError::email_not_found(email))?;

    if !verify_password(password, &user.password_hash)? {
        log::debug!("Failed login attempt for {}", email);
        return Err(AppError::bad_password());
    }

    log::info!("User logged in: {} (id: {})", email, user.id);

    Ok(user)
}

/// Get a user by id
pub fn get_user(store: &AppStore, user_id: &str) -> Result<User, AppError> {
    store
        .users
        .get(user_id)
        .ok_or_else(|| AppError::user_not_found(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_store;

    #[test]
    fn test_register_and_authenticate() {
        let store = setup_test_store();

        let user = register_user(&store, "a@a", "pw1").unwrap();
        assert_eq!(user.email, "a@a");
        assert_eq!(user.id.len(), 6);
        assert_ne!(user.password_hash, "pw1");

        // Login with the same credentials succeeds
        let authenticated = authenticate_user(&store, "a@a", "pw1").unwrap();
        assert_eq!(authenticated.id, user.id);
    }

    #[test]
    fn test_register_rejects_empty_fields() {
        let store = setup_test_store();

        assert!(matches!(
            register_user(&store, "", "pw1"),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            register_user(&store, "a@a", ""),
            Err(AppError::ValidationError(_))
        ));
        assert!(store.users.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let store = setup_test_store();

        register_user(&store, "a@a", "pw1").unwrap();
        let before = store.users.len();

        let result = register_user(&store, "a@a", "pw2");
        assert!(matches!(result, Err(AppError::EmailTaken(_))));

        // The user store gained exactly one entry across both calls
        assert_eq!(store.users.len(), before);
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn test_authenticate_unknown_email() {
        let store = setup_test_store();

        let result = authenticate_user(&store, "nobody@example.com", "pw1");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let store = setup_test_store();
        register_user(&store, "a@a", "pw1").unwrap();

        let result = authenticate_user(&store, "a@a", "wrong");
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        let store = setup_test_store();
        register_user(&store, "User@Example.com", "pw1").unwrap();

        // Different casing is a different (unknown) account
        let result = authenticate_user(&store, "user@example.com", "pw1");
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // And may be registered separately
        assert!(register_user(&store, "user@example.com", "pw2").is_ok());
        assert_eq!(store.users.len(), 2);
    }

    #[test]
    fn test_get_user() {
        let store = setup_test_store();
        let user = register_user(&store, "a@a", "pw1").unwrap();

        assert_eq!(get_user(&store, &user.id).unwrap().email, "a@a");
        assert!(matches!(
            get_user(&store, "nosuch"),
            Err(AppError::NotFound(_))
        ));
    }
}
