//! Link endpoint handlers: listing, creation form, detail, CRUD, JSON dump.

use std::collections::BTreeMap;

use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use validator::Validate;

use super::{found, html_response, see_other};
use crate::auth::CurrentUser;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreateLinkForm, ShortLink, UpdateLinkForm};
use crate::services;
use crate::store::AppStore;

#[derive(Template)]
#[template(path = "urls_index.html")]
struct UrlsIndexTemplate {
    email: String,
    links: Vec<ShortLink>,
}

#[derive(Template)]
#[template(path = "urls_new.html")]
struct UrlsNewTemplate {
    email: String,
}

#[derive(Template)]
#[template(path = "urls_show.html")]
struct UrlsShowTemplate {
    email: String,
    code: String,
    long_url: String,
    owner_email: String,
    short_url: String,
}

/// Homepage: send visitors to their links or to the login form
#[get("/")]
pub(super) async fn home(user: Option<CurrentUser>) -> HttpResponse {
    match user {
        Some(_) => found("/urls"),
        None => found("/login"),
    }
}

/// List the current user's links. Anonymous visitors are redirected to login.
#[get("/urls")]
pub(super) async fn index(
    user: Option<CurrentUser>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse, AppError> {
    let user = match user {
        Some(user) => user,
        None => return Ok(found("/login")),
    };

    let links = services::links_for_user(&store, &user.user_id);

    html_response(UrlsIndexTemplate {
        email: user.email,
        links,
    })
}

/// Public JSON dump of the entire link store, keyed by short code
#[get("/urls.json")]
pub(super) async fn dump_json(store: web::Data<AppStore>) -> HttpResponse {
    let dump: BTreeMap<String, ShortLink> = services::all_links(&store)
        .into_iter()
        .map(|link| (link.code.clone(), link))
        .collect();

    HttpResponse::Ok().json(dump)
}

/// Render the link creation form. Anonymous visitors are redirected to login.
#[get("/urls/new")]
pub(super) async fn new_form(user: Option<CurrentUser>) -> Result<HttpResponse, AppError> {
    let user = match user {
        Some(user) => user,
        None => return Ok(found("/login")),
    };

    html_response(UrlsNewTemplate { email: user.email })
}

/// Show a single link's detail page (owner only)
#[get("/urls/{code}")]
pub(super) async fn show(
    user: CurrentUser,
    store: web::Data<AppStore>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let link = services::get_owned_link(&store, &code, &user.user_id)?;
    let owner = services::get_user(&store, &link.owner_id)?;

    html_response(UrlsShowTemplate {
        email: user.email,
        short_url: format!("{}/u/{}", config.base_url, link.code),
        code: link.code,
        long_url: link.long_url,
        owner_email: owner.email,
    })
}

/// Create a new link owned by the current user
#[post("/urls")]
pub(super) async fn create(
    user: CurrentUser,
    store: web::Data<AppStore>,
    config: web::Data<Config>,
    form: web::Form<CreateLinkForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    url::Url::parse(&form.long_url)
        .map_err(|_| AppError::validation("Invalid URL format"))?;

    let link = services::create_link(
        &store,
        &form.long_url,
        &user.user_id,
        config.short_code_length,
    )?;

    Ok(see_other(&format!("/urls/{}", link.code)))
}

/// Replace a link's long URL (owner only)
#[post("/urls/{code}")]
pub(super) async fn update(
    user: CurrentUser,
    store: web::Data<AppStore>,
    path: web::Path<String>,
    form: web::Form<UpdateLinkForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {}", e)))?;

    url::Url::parse(&form.long_url)
        .map_err(|_| AppError::validation("Invalid URL format"))?;

    let code = path.into_inner();
    services::update_link(&store, &code, &user.user_id, &form.long_url)?;

    Ok(see_other("/urls"))
}

/// Delete a link (owner only)
#[post("/urls/{code}/delete")]
pub(super) async fn delete(
    user: CurrentUser,
    store: web::Data<AppStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    services::delete_link(&store, &code, &user.user_id)?;

    Ok(see_other("/urls"))
}
