use std::sync::Arc;

use super::*;

fn sample_user() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Ada".to_owned(),
        email: "a@x.com".to_owned(),
    }
}

fn memory_store() -> (Arc<MemoryStorage>, SessionStore) {
    let backend = Arc::new(MemoryStorage::new());
    let store = SessionStore::with_backend(backend.clone());
    (backend, store)
}

// =============================================================
// write / read round-trip
// =============================================================

#[test]
fn write_then_read_returns_the_same_session() {
    let (_, store) = memory_store();
    assert!(store.write("tok1", &sample_user(), Role::Admin));

    let stored = store.read().expect("session");
    assert_eq!(stored.token, "tok1");
    assert_eq!(stored.user, sample_user());
    assert_eq!(stored.role, Role::Admin);
}

#[test]
fn write_stores_each_field_under_its_fixed_key() {
    let (backend, store) = memory_store();
    store.write("tok1", &sample_user(), Role::Writer);

    assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("tok1"));
    assert_eq!(backend.get(ROLE_KEY).as_deref(), Some("writer"));
    let raw_user = backend.get(USER_KEY).expect("user key");
    let user: SessionUser = serde_json::from_str(&raw_user).expect("decode");
    assert_eq!(user, sample_user());
}

#[test]
fn read_requires_the_complete_triple() {
    let (backend, store) = memory_store();
    backend.set(TOKEN_KEY, "tok1");
    backend.set(ROLE_KEY, "admin");
    assert_eq!(store.read(), None);
    // A missing key is "no session", not corruption: nothing is cleared.
    assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("tok1"));
}

// =============================================================
// corruption handling
// =============================================================

#[test]
fn unparseable_user_clears_the_store() {
    let (backend, store) = memory_store();
    backend.set(TOKEN_KEY, "tok1");
    backend.set(USER_KEY, "{not json");
    backend.set(ROLE_KEY, "admin");

    assert_eq!(store.read(), None);
    assert_eq!(backend.get(TOKEN_KEY), None);
    assert_eq!(backend.get(USER_KEY), None);
    assert_eq!(backend.get(ROLE_KEY), None);
}

#[test]
fn unrecognized_role_clears_the_store() {
    let (backend, store) = memory_store();
    store.write("tok1", &sample_user(), Role::User);
    backend.set(ROLE_KEY, "superadmin");

    assert_eq!(store.read(), None);
    assert_eq!(backend.get(TOKEN_KEY), None);
}

#[test]
fn clear_is_idempotent() {
    let (backend, store) = memory_store();
    store.write("tok1", &sample_user(), Role::User);
    store.clear();
    store.clear();
    assert_eq!(backend.get(TOKEN_KEY), None);
    assert_eq!(store.read(), None);
}

// =============================================================
// backend selection
// =============================================================

#[test]
fn noop_storage_reports_persistence_unavailable() {
    let store = SessionStore::with_backend(Arc::new(NoopStorage));
    assert!(!store.write("tok1", &sample_user(), Role::Admin));
    assert_eq!(store.read(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn runtime_store_is_noop_outside_browser() {
    let store = SessionStore::for_runtime();
    assert!(!store.write("tok1", &sample_user(), Role::Admin));
    assert_eq!(store.read(), None);
}
