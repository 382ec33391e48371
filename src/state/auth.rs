//! Auth-session state for the signed-in console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthStore`] is the single source of truth for identity. It is
//! constructed once in `App`, rehydrated before the router mounts, provided
//! via context, and consumed by route guards, request plumbing, and
//! user-aware components. All mutation funnels through
//! [`AuthStore::apply_login`] and [`AuthStore::apply_logout`]; every other
//! consumer only reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use models::{Role, SessionUser};

use crate::state::session::{SessionStore, StoredSession};

/// Authentication state: the signed-in user, token, and role.
///
/// Replaced wholesale on every transition, never mutated field-by-field, so
/// subscribers cannot observe a half-updated value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl AuthState {
    /// A fully-populated signed-in state.
    #[must_use]
    pub fn authenticated(token: String, user: SessionUser, role: Role) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            role: Some(role),
        }
    }

    fn from_stored(stored: StoredSession) -> Self {
        Self::authenticated(stored.token, stored.user, stored.role)
    }

    /// Whether a session is established. Both transition paths populate the
    /// role together with the token and user, so an authenticated state
    /// always carries all three.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Whether the session carries the admin tier.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Some(Role::Admin)
    }
}

/// Observable container owning the console's [`AuthState`].
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    store: SessionStore,
}

impl AuthStore {
    /// An unauthenticated container over `store`. Call
    /// [`AuthStore::initialize`] before mounting any guarded route.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store,
        }
    }

    /// One-shot rehydration from the session store: publishes the persisted
    /// session when the complete triple is present, the empty state
    /// otherwise. Synchronous, so no guard can observe a pre-rehydration
    /// value.
    pub fn initialize(&self) {
        match self.store.read() {
            Some(stored) => self.state.set(AuthState::from_stored(stored)),
            None => self.state.set(AuthState::default()),
        }
    }

    /// Persist and publish a fresh session as one atomic broadcast.
    ///
    /// Returns `false` when the credential store could not persist the
    /// session; the in-memory state is published regardless and the session
    /// simply will not survive a reload.
    pub fn apply_login(&self, token: &str, user: SessionUser, role: Role) -> bool {
        let persisted = self.store.write(token, &user, role);
        if !persisted {
            leptos::logging::warn!("session persistence unavailable; continuing in-memory");
        }
        self.state.set(AuthState::authenticated(token.to_owned(), user, role));
        persisted
    }

    /// Clear persistence and publish the empty state. Idempotent.
    pub fn apply_logout(&self) {
        self.store.clear();
        self.state.set(AuthState::default());
    }

    /// Current state without subscribing; for one-shot decisions such as
    /// guard evaluation and request authorization headers.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Read-only stream of state changes for reactive consumers.
    #[must_use]
    pub fn stream(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }
}
