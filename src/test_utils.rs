//! Test utilities and helpers.
//!
//! Provides common test infrastructure used across multiple test modules.
//! This module is only compiled when running tests.

#![cfg(test)]

use actix_web::cookie::Key;

use crate::config::Config;
use crate::models::{ShortLink, User};
use crate::store::AppStore;

/// Create a fresh, empty pair of in-memory stores.
///
/// Each call returns an isolated instance, so tests never share state.
pub fn setup_test_store() -> AppStore {
    AppStore::new()
}

/// Create a default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Create a deterministic cookie signing key for tests.
pub fn test_key() -> Key {
    crate::session::signing_key(&test_config().session_secret)
}

/// Helper to register a test user.
pub fn create_test_user(store: &AppStore, email: &str, password: &str) -> User {
    crate::services::register_user(store, email, password).expect("Failed to create test user")
}

/// Helper to create a test link for a user.
pub fn create_test_link(store: &AppStore, owner_id: &str, long_url: &str) -> ShortLink {
    crate::services::create_link(store, long_url, owner_id, 6).expect("Failed to create test link")
}

/// Extension trait for test assertions.
pub trait TestAssertions {
    /// Assert that a result is Ok.
    fn assert_ok(&self);
    /// Assert that a result is Err.
    fn assert_err(&self);
}

impl<T, E: std::fmt::Debug> TestAssertions for Result<T, E> {
    fn assert_ok(&self) {
        assert!(self.is_ok(), "Expected Ok, got Err: {:?}", self.as_ref().err());
    }

    fn assert_err(&self) {
        assert!(self.is_err(), "Expected Err, got Ok");
    }
}
