//! Session context service.
//!
//! Several independent views (navbar, guards, pages) read the session
//! without a shared subscription mechanism, so every mutation bumps an
//! epoch signal; observers track it and re-read the store from scratch
//! (pull-based, not payload-based).

use contracts::auth::UserProfile;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy)]
pub struct SessionService {
    epoch: RwSignal<u64>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            epoch: RwSignal::new(0),
        }
    }

    /// Persist token + profile and broadcast the change. Call only right
    /// after a successful authentication response.
    pub fn save_session(&self, token: &str, user: &UserProfile) {
        storage::browser().save_session(token, user);
        self.notify();
    }

    /// Explicit logout: clears both entries and broadcasts.
    pub fn clear_session(&self) {
        storage::browser().clear_session();
        self.notify();
    }

    pub fn token(&self) -> Option<String> {
        self.epoch.track();
        storage::browser().token()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.epoch.track();
        storage::browser().current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn notify(&self) {
        self.epoch.update(|epoch| *epoch += 1);
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionService not found in component tree")
}
