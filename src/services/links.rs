//! Short link business rules: create, lookup, update, delete, listing.
//!
//! All guards run before any mutation (validate first, fail closed): a
//! rejected update or delete leaves the store untouched.

use super::helpers::generate_short_code;
use crate::constants::MAX_CODE_GENERATION_RETRIES;
use crate::errors::AppError;
use crate::models::ShortLink;
use crate::store::AppStore;

/// Create a new short link owned by the given user.
///
/// Generates a fresh code, retrying on collision up to a bounded number of
/// attempts before giving up with an internal error.
pub fn create_link(
    store: &AppStore,
    long_url: &str,
    owner_id: &str,
    code_length: usize,
) -> Result<ShortLink, AppError> {
    let mut code = generate_short_code(code_length);
    let mut attempts = 0;
    while store.links.contains(&code) {
        attempts += 1;
        if attempts >= MAX_CODE_GENERATION_RETRIES {
            return Err(AppError::internal("Failed to generate a unique short code"));
        }
        code = generate_short_code(code_length);
    }

    let link = ShortLink {
        code: code.clone(),
        long_url: long_url.to_string(),
        owner_id: owner_id.to_string(),
    };
    store.links.insert(link.clone());

    log::info!("Created short link: {} -> {} (owner: {})", code, long_url, owner_id);

    Ok(link)
}

/// Get a link by its short code (for redirects - no ownership check)
pub fn get_link(store: &AppStore, code: &str) -> Result<ShortLink, AppError> {
    store
        .links
        .get(code)
        .ok_or_else(|| AppError::link_not_found(code))
}

/// Get a link by code, requiring the caller to be its owner.
///
/// Distinguishes a missing code (NotFound) from someone else's link
/// (Forbidden).
pub fn get_owned_link(store: &AppStore, code: &str, user_id: &str) -> Result<ShortLink, AppError> {
    let link = get_link(store, code)?;
    if link.owner_id != user_id {
        return Err(AppError::not_owner(code));
    }
    Ok(link)
}

/// Replace a link's long URL. Requires the code to exist and the caller to
/// be the owner; both checks run before the store is touched.
pub fn update_link(
    store: &AppStore,
    code: &str,
    user_id: &str,
    new_long_url: &str,
) -> Result<ShortLink, AppError> {
    get_owned_link(store, code, user_id)?;

    let updated = store
        .links
        .set_long_url(code, new_long_url)
        .ok_or_else(|| AppError::link_not_found(code))?;

    log::info!("Updated short link: {} -> {} (owner: {})", code, new_long_url, user_id);

    Ok(updated)
}

/// Delete a link. Same guard order as update.
pub fn delete_link(store: &AppStore, code: &str, user_id: &str) -> Result<(), AppError> {
    get_owned_link(store, code, user_id)?;

    store
        .links
        .remove(code)
        .ok_or_else(|| AppError::link_not_found(code))?;

    log::info!("Deleted short link: {} (owner: {})", code, user_id);

    Ok(())
}

/// All links owned by the given user
pub fn links_for_user(store: &AppStore, user_id: &str) -> Vec<ShortLink> {
    store.links.for_owner(user_id)
}

/// The entire link store, for the public JSON dump
pub fn all_links(store: &AppStore) -> Vec<ShortLink> {
    store.links.all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_user, setup_test_store};

    #[test]
    fn test_create_and_get_link() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");

        let link = create_link(&store, "https://example.com", &user.id, 6).unwrap();
        assert_eq!(link.code.len(), 6);
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.owner_id, user.id);

        // get(code) immediately after create returns the same record
        let retrieved = get_link(&store, &link.code).unwrap();
        assert_eq!(retrieved, link);
    }

    #[test]
    fn test_get_unknown_code_is_not_found() {
        let store = setup_test_store();
        let result = get_link(&store, "nosuch");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_get_owned_link_rejects_non_owner() {
        let store = setup_test_store();
        let owner = create_test_user(&store, "owner@example.com", "pw1");
        let other = create_test_user(&store, "other@example.com", "pw2");

        let link = create_link(&store, "https://example.com", &owner.id, 6).unwrap();

        assert!(get_owned_link(&store, &link.code, &owner.id).is_ok());

        let result = get_owned_link(&store, &link.code, &other.id);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_update_link_replaces_long_url() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");

        let link = create_link(&store, "https://old.example.com", &user.id, 6).unwrap();
        let updated = update_link(&store, &link.code, &user.id, "https://new.example.com").unwrap();

        assert_eq!(updated.code, link.code);
        assert_eq!(updated.long_url, "https://new.example.com");
        assert_eq!(
            get_link(&store, &link.code).unwrap().long_url,
            "https://new.example.com"
        );
    }

    #[test]
    fn test_rejected_update_leaves_link_unchanged() {
        let store = setup_test_store();
        let owner = create_test_user(&store, "owner@example.com", "pw1");
        let other = create_test_user(&store, "other@example.com", "pw2");

        let link = create_link(&store, "https://example.com", &owner.id, 6).unwrap();

        let result = update_link(&store, &link.code, &other.id, "https://evil.example.com");
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        // No state change on rejection
        assert_eq!(
            get_link(&store, &link.code).unwrap().long_url,
            "https://example.com"
        );
    }

    #[test]
    fn test_delete_link_ownership() {
        let store = setup_test_store();
        let owner = create_test_user(&store, "owner@example.com", "pw1");
        let other = create_test_user(&store, "other@example.com", "pw2");

        let link = create_link(&store, "https://example.com", &owner.id, 6).unwrap();

        // Non-owner cannot delete, and the link survives
        let result = delete_link(&store, &link.code, &other.id);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(get_link(&store, &link.code).is_ok());

        // Owner can delete
        delete_link(&store, &link.code, &owner.id).unwrap();
        assert!(matches!(
            get_link(&store, &link.code),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_unknown_code_is_not_found() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");

        let result = delete_link(&store, "nosuch", &user.id);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_links_for_user_returns_exact_owner_subset() {
        let store = setup_test_store();
        let user1 = create_test_user(&store, "user1@example.com", "pw1");
        let user2 = create_test_user(&store, "user2@example.com", "pw2");

        let mut user1_codes = Vec::new();
        for i in 0..3 {
            let link =
                create_link(&store, &format!("https://example{}.com", i), &user1.id, 6).unwrap();
            user1_codes.push(link.code);
        }
        for i in 0..2 {
            create_link(&store, &format!("https://other{}.com", i), &user2.id, 6).unwrap();
        }

        let user1_links = links_for_user(&store, &user1.id);
        assert_eq!(user1_links.len(), 3);
        assert!(user1_links.iter().all(|l| l.owner_id == user1.id));
        assert!(user1_links
            .iter()
            .all(|l| user1_codes.contains(&l.code)));

        // Deleting one of user1's links shrinks only user1's subset
        delete_link(&store, &user1_codes[0], &user1.id).unwrap();
        assert_eq!(links_for_user(&store, &user1.id).len(), 2);
        assert_eq!(links_for_user(&store, &user2.id).len(), 2);
    }

    #[test]
    fn test_all_links_is_the_whole_store() {
        let store = setup_test_store();
        let user1 = create_test_user(&store, "user1@example.com", "pw1");
        let user2 = create_test_user(&store, "user2@example.com", "pw2");

        create_link(&store, "https://a.example.com", &user1.id, 6).unwrap();
        create_link(&store, "https://b.example.com", &user2.id, 6).unwrap();

        let all = all_links(&store);
        assert_eq!(all.len(), 2);

        // Sorted by code for a deterministic dump
        assert!(all[0].code <= all[1].code);
    }

    #[test]
    fn test_created_codes_are_lowercase_alphanumeric() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");

        for _ in 0..20 {
            let link = create_link(&store, "https://example.com", &user.id, 6).unwrap();
            assert!(link
                .code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
