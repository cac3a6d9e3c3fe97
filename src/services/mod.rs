//! Business logic, organized by domain.
//!
//! Handlers call into these modules; the modules operate on the in-memory
//! stores and enforce the application's rules.

mod auth;
mod helpers;
mod links;

pub use auth::{authenticate_user, get_user, register_user};
pub use helpers::{generate_short_code, generate_user_id, hash_password, verify_password};
pub use links::{
    all_links, create_link, delete_link, get_link, get_owned_link, links_for_user, update_link,
};
