//! Durable persistence for the signed-in session.
//!
//! DESIGN
//! ======
//! Storage access goes through the [`KeyValueStore`] capability so the rest
//! of the crate never checks what runtime it is in: browser builds persist
//! to `localStorage`, server rendering gets an explicit no-op backend, and
//! tests inject an in-memory one. [`SessionStore`] layers the typed
//! three-key session codec on top and self-heals by clearing corrupted data
//! so the next load starts clean.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use models::{Role, SessionUser};

use crate::util::persistence;

/// Storage key for the opaque session token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the serialized [`SessionUser`] record.
pub const USER_KEY: &str = "current_user";
/// Storage key for the session role string.
pub const ROLE_KEY: &str = "user_role";

/// A complete persisted session triple.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: SessionUser,
    pub role: Role,
}

/// Raw durable key/value capability backing the session store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns `false` when the backend cannot persist the value.
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage for browser builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        persistence::get_item(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        persistence::set_item(key, value)
    }

    fn remove(&self, key: &str) {
        persistence::remove_item(key);
    }
}

/// Storage that never persists; selected during server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStorage;

impl KeyValueStore for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> bool {
        false
    }

    fn remove(&self, _key: &str) {}
}

/// In-memory storage for tests and non-browser tooling.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .map(|mut entries| {
                entries.insert(key.to_owned(), value.to_owned());
            })
            .is_ok()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Typed session codec over a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Store for the current runtime: `localStorage` in the browser, no-op
    /// during server rendering.
    #[must_use]
    pub fn for_runtime() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::with_backend(Arc::new(BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::with_backend(Arc::new(NoopStorage))
        }
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persist the session triple. Returns `false` when persistence is
    /// unavailable; callers continue with in-memory state only.
    pub fn write(&self, token: &str, user: &SessionUser, role: Role) -> bool {
        let Ok(serialized) = serde_json::to_string(user) else {
            return false;
        };
        let mut stored = self.backend.set(TOKEN_KEY, token);
        stored &= self.backend.set(USER_KEY, &serialized);
        stored &= self.backend.set(ROLE_KEY, role.as_str());
        stored
    }

    /// Read the persisted session.
    ///
    /// Requires the complete triple; a missing key is simply "no session".
    /// Data that is present but fails to deserialize (or carries a role
    /// outside the closed enumeration) clears the store before returning
    /// `None`, so a corrupt record cannot fail every subsequent load.
    #[must_use]
    pub fn read(&self) -> Option<StoredSession> {
        let token = self.backend.get(TOKEN_KEY)?;
        let raw_user = self.backend.get(USER_KEY)?;
        let raw_role = self.backend.get(ROLE_KEY)?;

        let Ok(user) = serde_json::from_str::<SessionUser>(&raw_user) else {
            leptos::logging::warn!("clearing corrupted session user record");
            self.clear();
            return None;
        };
        let Some(role) = Role::parse(&raw_role) else {
            leptos::logging::warn!("clearing session with unrecognized role: {raw_role}");
            self.clear();
            return None;
        };
        Some(StoredSession { token, user, role })
    }

    /// Remove all session keys. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(ROLE_KEY);
    }
}
