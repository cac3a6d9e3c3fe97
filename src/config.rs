//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::constants::{DEFAULT_SHORT_CODE_LENGTH, MIN_SESSION_SECRET_LENGTH};

/// Development-only fallback secret. Long enough for cookie-key derivation;
/// real deployments must set SESSION_SECRET.
const DEV_SESSION_SECRET: &str = "tinylink-dev-session-secret-change-me-before-deploying-0000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL for generating short links
    pub base_url: String,
    /// Length of generated short codes
    pub short_code_length: usize,
    /// Secret used to sign the session cookie
    pub session_secret: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `BASE_URL`: Base URL for short links (default: "http://{host}:{port}")
    /// - `SHORT_CODE_LENGTH`: Length of generated codes (default: 6)
    /// - `SESSION_SECRET`: Cookie signing secret, at least 32 bytes
    ///   (default: a development-only value)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| DEV_SESSION_SECRET.to_string());
        assert!(
            session_secret.len() >= MIN_SESSION_SECRET_LENGTH,
            "SESSION_SECRET must be at least {} bytes",
            MIN_SESSION_SECRET_LENGTH
        );

        Self {
            host,
            port,
            base_url,
            short_code_length: env::var("SHORT_CODE_LENGTH")
                .unwrap_or_else(|_| DEFAULT_SHORT_CODE_LENGTH.to_string())
                .parse()
                .expect("SHORT_CODE_LENGTH must be a valid number"),
            session_secret,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            short_code_length: DEFAULT_SHORT_CODE_LENGTH,
            session_secret: DEV_SESSION_SECRET.to_string(),
        }
    }
}
