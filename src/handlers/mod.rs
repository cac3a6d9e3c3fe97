//! HTTP request handlers for the link shortener.
//!
//! Defines all route handlers and configures the routing table.

mod auth;
mod health;
mod links;
mod redirect;

use actix_web::{web, HttpResponse};
use askama::Template;

use crate::errors::AppError;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(links::home)
        // Auth pages and actions
        .service(auth::login_page)
        .service(auth::register_page)
        .service(auth::login)
        .service(auth::register)
        .service(auth::logout)
        // Link routes; /urls/new must be registered before /urls/{code}
        .service(links::index)
        .service(links::dump_json)
        .service(links::new_form)
        .service(links::show)
        .service(links::create)
        .service(links::delete)
        .service(links::update)
        // Public redirect and liveness
        .service(redirect::follow)
        .service(health::health_check);
}

/// 302 redirect, used for navigation from GET requests
fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", location.to_string()))
        .finish()
}

/// 303 redirect, used after a successful POST
fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header(("Location", location.to_string()))
        .finish()
}

/// Render an askama template into an HTML response
fn html_response<T: Template>(template: T) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(template.render()?))
}
