//! In-memory stores for links and users.
//!
//! All state is memory-resident and lost on restart. The stores are built on
//! concurrent maps because actix-web handles requests on a multi-threaded
//! runtime; handlers receive them as explicit shared state via `web::Data`
//! rather than through process-wide singletons.
//!
//! The stores expose plain data access only. Business rules (ownership
//! checks, collision retries, duplicate-email rejection) live in the
//! `services` layer.

use dashmap::DashMap;

use crate::models::{ShortLink, User};

/// Mapping from short code to link record
#[derive(Debug, Default)]
pub struct LinkStore {
    inner: DashMap<String, ShortLink>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a link by its short code
    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.inner.get(code).map(|entry| entry.value().clone())
    }

    /// Whether a short code is already taken
    pub fn contains(&self, code: &str) -> bool {
        self.inner.contains_key(code)
    }

    /// Insert a link record, keyed by its code
    pub fn insert(&self, link: ShortLink) {
        self.inner.insert(link.code.clone(), link);
    }

    /// Replace the long URL of an existing link.
    ///
    /// Returns the updated record, or `None` when the code is absent.
    pub fn set_long_url(&self, code: &str, long_url: &str) -> Option<ShortLink> {
        self.inner.get_mut(code).map(|mut entry| {
            entry.long_url = long_url.to_string();
            entry.value().clone()
        })
    }

    /// Remove a link by code. Returns the removed record if it existed.
    pub fn remove(&self, code: &str) -> Option<ShortLink> {
        self.inner.remove(code).map(|(_, link)| link)
    }

    /// All links owned by the given user, sorted by code
    pub fn for_owner(&self, owner_id: &str) -> Vec<ShortLink> {
        let mut links: Vec<ShortLink> = self
            .inner
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(|a, b| a.code.cmp(&b.code));
        links
    }

    /// Every link in the store, sorted by code
    pub fn all(&self) -> Vec<ShortLink> {
        let mut links: Vec<ShortLink> = self.inner.iter().map(|entry| entry.value().clone()).collect();
        links.sort_by(|a, b| a.code.cmp(&b.code));
        links
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Mapping from user id to user record
#[derive(Debug, Default)]
pub struct UserStore {
    inner: DashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by id
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.inner.get(user_id).map(|entry| entry.value().clone())
    }

    /// Whether a user id is already taken
    pub fn contains(&self, user_id: &str) -> bool {
        self.inner.contains_key(user_id)
    }

    /// Linear scan for a user by email. Exact, case-sensitive comparison;
    /// first match wins (emails are kept unique at registration).
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone())
    }

    /// Insert a user record, keyed by id
    pub fn insert(&self, user: User) {
        self.inner.insert(user.id.clone(), user);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Application state: the two stores, injected into every handler
#[derive(Debug, Default)]
pub struct AppStore {
    pub links: LinkStore,
    pub users: UserStore,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }
}
