//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server decides who is signed in and injects that record into the
//! page globals, so the server render and the first client render agree on
//! `is_authenticated()` and no logged-out flash appears during hydration.
//! The record only changes through a login (save + reload) or a logout
//! (navigation to `/logout`); mounted components never see it mutate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::browser;
use crate::util::storage::{self, KeyValueStore};

/// `localStorage` key for the last successful login response.
pub const USER_INFO_KEY: &str = "userInfo";

/// Server endpoint that ends the session and redirects.
pub const LOGOUT_PATH: &str = "/logout";

/// Read-only view of the injected session record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    user: Option<User>,
}

impl SessionStore {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn get_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Persist a login response so it survives the reload that follows.
pub fn save_user_info(store: &impl KeyValueStore, user: &User) {
    storage::save_json(store, USER_INFO_KEY, user);
}

/// Navigate to the logout endpoint. Client state is left as-is; the
/// server invalidates the session and the next page load reflects it.
pub fn logout() {
    browser::navigate_to(LOGOUT_PATH);
}
