//! Auth endpoint handlers: registration, login, logout.

use actix_web::{cookie::Key, get, post, web, HttpResponse};
use askama::Template;
use validator::Validate;

use super::{found, html_response, see_other};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{LoginForm, RegisterForm};
use crate::services;
use crate::session;
use crate::store::AppStore;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    email: String,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    email: String,
}

/// Render the login form; authenticated visitors are sent to their links
#[get("/login")]
pub(super) async fn login_page(user: Option<CurrentUser>) -> Result<HttpResponse, AppError> {
    if user.is_some() {
        return Ok(found("/urls"));
    }

    html_response(LoginTemplate { email: String::new() })
}

/// Render the registration form; authenticated visitors are sent to their links
#[get("/register")]
pub(super) async fn register_page(user: Option<CurrentUser>) -> Result<HttpResponse, AppError> {
    if user.is_some() {
        return Ok(found("/urls"));
    }

    html_response(RegisterTemplate { email: String::new() })
}

/// Authenticate and establish a session
#[post("/login")]
pub(super) async fn login(
    store: web::Data<AppStore>,
    key: web::Data<Key>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    if form.email.is_empty() || form.password.is_empty() {
        return Err(AppError::validation("Email and password must not be empty"));
    }

    let user = services::authenticate_user(&store, &form.email, &form.password)?;
    let cookie = session::create_session_cookie(&key, &user.id)?;

    let mut response = see_other("/urls");
    response
        .add_cookie(&cookie)
        .map_err(|e| AppError::internal(format!("Failed to set session cookie: {}", e)))?;

    Ok(response)
}

/// Create an account and establish a session for the new user
#[post("/register")]
pub(super) async fn register(
    store: web::Data<AppStore>,
    key: web::Data<Key>,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    let user = services::register_user(&store, &form.email, &form.password)?;
    let cookie = session::create_session_cookie(&key, &user.id)?;

    let mut response = see_other("/urls");
    response
        .add_cookie(&cookie)
        .map_err(|e| AppError::internal(format!("Failed to set session cookie: {}", e)))?;

    Ok(response)
}

/// Clear the session cookie
#[post("/logout")]
pub(super) async fn logout() -> Result<HttpResponse, AppError> {
    let mut response = see_other("/login");
    response
        .add_cookie(&session::clear_session_cookie())
        .map_err(|e| AppError::internal(format!("Failed to clear session cookie: {}", e)))?;

    Ok(response)
}
