//! Session authentication module.
//!
//! Provides an extractor for resolving the current user on protected
//! endpoints.

use actix_web::{cookie::Key, dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::errors::AppError;
use crate::services;
use crate::session;
use crate::store::AppStore;

/// Authenticated user extractor for protecting endpoints.
///
/// Add this to handler parameters to require a valid session. The session
/// is the signed `user_id` cookie; the referenced user must still exist in
/// the user store. Use `Option<CurrentUser>` on pages that merely branch on
/// whether someone is logged in.
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get the shared store from app data
        let store = match req.app_data::<web::Data<AppStore>>() {
            Some(store) => store,
            None => {
                return ready(Err(AppError::internal("Application store not available")));
            }
        };

        // Get the cookie signing key from app data
        let key = match req.app_data::<web::Data<Key>>() {
            Some(key) => key,
            None => {
                return ready(Err(AppError::internal("Session key not available")));
            }
        };

        // Absent or tampered cookie means no session
        let user_id = match session::user_id_from_request(req, key) {
            Some(user_id) => user_id,
            None => return ready(Err(AppError::no_session())),
        };

        // The cookie may outlive the process that issued it; the stores are
        // memory-resident, so treat a dangling user id as no session too.
        match services::get_user(store, &user_id) {
            Ok(user) => ready(Ok(CurrentUser {
                user_id: user.id,
                email: user.email,
            })),
            Err(_) => ready(Err(AppError::no_session())),
        }
    }
}
