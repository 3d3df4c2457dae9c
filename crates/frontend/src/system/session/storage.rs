//! Persistent session storage: auth token and the user profile snapshot
//! cached at login time.

use contracts::auth::UserProfile;
use web_sys::window;

const TOKEN_KEY: &str = "library_token";
const USER_KEY: &str = "library_user";

/// Seam over the key-value backend so the store can be exercised without
/// a browser.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage`-backed implementation used by the running app.
pub struct BrowserStorage;

impl KeyValue for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub struct SessionStore<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write both values. Must be called only right after a successful
    /// authentication response.
    pub fn save_session(&self, token: &str, user: &UserProfile) {
        self.store.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    pub fn clear_session(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Last-cached profile snapshot; never revalidated against the server.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.store
            .get(USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    /// Presence of a token, not its validity: an expired token still reads
    /// as authenticated until the next API call fails.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

pub fn browser() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// Token accessor used by the request plumbing.
pub fn get_token() -> Option<String> {
    browser().token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::auth::Role;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValue for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: "A".into(),
            email: "a@example.com".into(),
            role: Role::User,
            created_at: None,
        }
    }

    #[test]
    fn authenticated_after_save_and_not_after_clear() {
        let store = SessionStore::new(MemoryStorage::default());
        assert!(!store.is_authenticated());

        store.save_session("abc", &profile());
        assert!(store.is_authenticated());

        store.clear_session();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn save_session_round_trips_token_and_user() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save_session("abc", &profile());

        assert_eq!(store.token().as_deref(), Some("abc"));
        let user = store.current_user().unwrap();
        assert_eq!(user.name, "A");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn store_mirrors_whatever_was_last_written() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save_session("first", &profile());
        let mut other = profile();
        other.name = "B".into();
        store.save_session("second", &other);

        assert_eq!(store.token().as_deref(), Some("second"));
        assert_eq!(store.current_user().unwrap().name, "B");
    }
}
