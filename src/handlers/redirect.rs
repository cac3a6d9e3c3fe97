//! Redirect endpoint handler.

use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::errors::AppError;
use crate::services;
use crate::store::AppStore;

#[derive(Template)]
#[template(path = "message.html")]
struct MessageTemplate {
    message: String,
}

/// Follow a short link.
///
/// When someone visits /u/{code}, they get redirected to the stored long
/// URL. The existence check runs before the redirect: an unknown code
/// renders a "does not exist" page and issues no redirect.
#[get("/u/{code}")]
pub(super) async fn follow(
    store: web::Data<AppStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();

    match services::get_link(&store, &code) {
        Ok(link) => {
            log::info!("Redirecting {} -> {}", code, link.long_url);

            Ok(HttpResponse::Found()
                .append_header(("Location", link.long_url))
                .finish())
        }
        Err(AppError::NotFound(_)) => {
            log::debug!("Redirect requested for unknown code: {}", code);

            let page = MessageTemplate {
                message: format!("Short link '{}' does not exist.", code),
            };
            Ok(HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(page.render()?))
        }
        Err(e) => Err(e),
    }
}
