//! Signed session cookie helpers.
//!
//! The session is an opaque, signed client-side token carrying only the
//! authenticated user's id. There is no server-side session table: the
//! cookie is set on login/registration, verified on every request through
//! the signing key, and cleared on logout.

use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use actix_web::HttpRequest;

use crate::constants::SESSION_COOKIE_NAME;
use crate::errors::AppError;

/// Derive the cookie signing key from the configured secret
pub fn signing_key(secret: &str) -> Key {
    Key::derive_from(secret.as_bytes())
}

/// Build a signed session cookie carrying the given user id
pub fn create_session_cookie(key: &Key, user_id: &str) -> Result<Cookie<'static>, AppError> {
    let cookie = Cookie::build(SESSION_COOKIE_NAME, user_id.to_owned())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(cookie);

    jar.get(SESSION_COOKIE_NAME)
        .cloned()
        .ok_or_else(|| AppError::internal("Failed to sign session cookie"))
}

/// Build an expired cookie that clears the session
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// Extract and verify the user id from the request's session cookie.
///
/// Returns `None` when the cookie is absent or its signature does not
/// verify, so a tampered cookie degrades to an anonymous request.
pub fn user_id_from_request(req: &HttpRequest, key: &Key) -> Option<String> {
    let raw = req.cookie(SESSION_COOKIE_NAME)?;

    let mut jar = CookieJar::new();
    jar.add_original(raw);

    jar.signed(key)
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn test_key() -> Key {
        Key::derive_from(b"tinylink-test-session-secret-0123456789abcdef")
    }

    #[test]
    fn test_session_cookie_round_trip() {
        let key = test_key();
        let cookie = create_session_cookie(&key, "u1d2e3").unwrap();

        // The signed value on the wire is not the raw user id
        assert_ne!(cookie.value(), "u1d2e3");

        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(user_id_from_request(&req, &key), Some("u1d2e3".to_string()));
    }

    #[test]
    fn test_missing_cookie_is_anonymous() {
        let key = test_key();
        let req = TestRequest::default().to_http_request();
        assert_eq!(user_id_from_request(&req, &key), None);
    }

    #[test]
    fn test_tampered_cookie_is_rejected() {
        let key = test_key();

        let forged = Cookie::new(SESSION_COOKIE_NAME, "u1d2e3");
        let req = TestRequest::default().cookie(forged).to_http_request();
        assert_eq!(user_id_from_request(&req, &key), None);
    }

    #[test]
    fn test_cookie_signed_with_other_key_is_rejected() {
        let key = test_key();
        let other = Key::derive_from(b"tinylink-other-session-secret-0123456789abcdef");

        let cookie = create_session_cookie(&other, "u1d2e3").unwrap();
        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(user_id_from_request(&req, &key), None);
    }

    #[test]
    fn test_clear_cookie_expires_session() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert!(cookie.value().is_empty());
    }
}
