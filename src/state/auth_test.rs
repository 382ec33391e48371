use std::sync::Arc;

use super::*;
use crate::state::session::{MemoryStorage, NoopStorage, USER_KEY};

fn sample_user() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Ada".to_owned(),
        email: "a@x.com".to_owned(),
    }
}

fn store_with_backend(backend: Arc<MemoryStorage>) -> AuthStore {
    AuthStore::new(SessionStore::with_backend(backend))
}

// =============================================================
// initialization
// =============================================================

#[test]
fn initialize_with_empty_store_publishes_unauthenticated_state() {
    let auth = store_with_backend(Arc::new(MemoryStorage::new()));
    auth.initialize();

    let state = auth.snapshot();
    assert_eq!(state, AuthState::default());
    assert!(!state.is_authenticated());
}

#[test]
fn login_then_fresh_initialize_round_trips_the_session() {
    let backend = Arc::new(MemoryStorage::new());
    let auth = store_with_backend(backend.clone());
    auth.initialize();
    auth.apply_login("tok1", sample_user(), Role::Admin);

    // Simulated reload: a new container over the same persisted store.
    let rehydrated = store_with_backend(backend);
    rehydrated.initialize();

    let state = rehydrated.snapshot();
    assert_eq!(
        state,
        AuthState::authenticated("tok1".to_owned(), sample_user(), Role::Admin)
    );
    assert!(state.is_authenticated());
    assert!(state.is_admin());
}

#[test]
fn initialize_with_corrupted_user_record_fails_closed() {
    let backend = Arc::new(MemoryStorage::new());
    let auth = store_with_backend(backend.clone());
    auth.apply_login("tok1", sample_user(), Role::Admin);
    backend.set(USER_KEY, "{not json");

    auth.initialize();

    assert_eq!(auth.snapshot(), AuthState::default());
    // The store self-cleared, so the next load starts clean.
    assert_eq!(backend.get(USER_KEY), None);
}

// =============================================================
// transitions
// =============================================================

#[test]
fn apply_login_publishes_a_complete_state_in_one_broadcast() {
    let auth = store_with_backend(Arc::new(MemoryStorage::new()));
    auth.initialize();
    let persisted = auth.apply_login("tok1", sample_user(), Role::Writer);

    assert!(persisted);
    let state = auth.snapshot();
    assert_eq!(state.token.as_deref(), Some("tok1"));
    assert_eq!(state.user, Some(sample_user()));
    assert_eq!(state.role, Some(Role::Writer));
}

#[test]
fn apply_login_without_persistence_still_publishes() {
    let auth = AuthStore::new(SessionStore::with_backend(Arc::new(NoopStorage)));
    auth.initialize();
    let persisted = auth.apply_login("tok1", sample_user(), Role::Admin);

    assert!(!persisted);
    assert!(auth.snapshot().is_authenticated());
}

#[test]
fn second_login_wins_wholesale() {
    let auth = store_with_backend(Arc::new(MemoryStorage::new()));
    auth.apply_login("tok1", sample_user(), Role::Admin);
    let other = SessionUser {
        id: 2,
        name: "Eve".to_owned(),
        email: "e@x.com".to_owned(),
    };
    auth.apply_login("tok2", other.clone(), Role::User);

    let state = auth.snapshot();
    assert_eq!(state.token.as_deref(), Some("tok2"));
    assert_eq!(state.user, Some(other));
    assert_eq!(state.role, Some(Role::User));
    assert!(!state.is_admin());
}

#[test]
fn logout_twice_is_idempotent() {
    let backend = Arc::new(MemoryStorage::new());
    let auth = store_with_backend(backend.clone());
    auth.apply_login("tok1", sample_user(), Role::Admin);

    auth.apply_logout();
    let once = auth.snapshot();
    auth.apply_logout();
    let twice = auth.snapshot();

    assert_eq!(once, AuthState::default());
    assert_eq!(once, twice);
    assert_eq!(backend.get(USER_KEY), None);
}

// =============================================================
// derived accessors
// =============================================================

#[test]
fn is_admin_requires_both_authentication_and_admin_role() {
    assert!(!AuthState::default().is_admin());
    let writer = AuthState::authenticated("tok1".to_owned(), sample_user(), Role::Writer);
    assert!(writer.is_authenticated());
    assert!(!writer.is_admin());
    let admin = AuthState::authenticated("tok1".to_owned(), sample_user(), Role::Admin);
    assert!(admin.is_admin());
}

#[test]
fn stream_reflects_the_latest_published_state() {
    let auth = store_with_backend(Arc::new(MemoryStorage::new()));
    let stream = auth.stream();
    auth.apply_login("tok1", sample_user(), Role::Admin);
    assert!(stream.get_untracked().is_admin());
    auth.apply_logout();
    assert!(!stream.get_untracked().is_authenticated());
}
