//! tinylink - a small multi-user link shortener.
//!
//! Serves an HTML interface for registering, logging in, and managing
//! short links, plus a public redirect endpoint at /u/{code}.

mod auth;
mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod services;
mod session;
mod store;
mod test_utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use crate::config::Config;
use crate::session::signing_key;
use crate::store::AppStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let key = signing_key(&config.session_secret);
    let store = web::Data::new(AppStore::new());

    let bind_addr = format!("{}:{}", config.host, config.port);
    log::info!("Starting tinylink on {}", bind_addr);
    log::info!("Short links served under {}/u/", config.base_url);

    let config = web::Data::new(config);
    let key = web::Data::new(key);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .app_data(key.clone())
            .wrap(Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
