use std::sync::Arc;

use super::*;
use crate::state::session::{MemoryStorage, SessionStore};
use models::SessionUser;

fn auth_store() -> AuthStore {
    AuthStore::new(SessionStore::with_backend(Arc::new(MemoryStorage::new())))
}

#[test]
fn endpoint_prefixes_the_api_base() {
    assert_eq!(endpoint("/auth/login"), "/api/auth/login");
    assert_eq!(endpoint("/admin/users/stats"), "/api/admin/users/stats");
}

#[test]
fn bearer_uses_the_current_session_token() {
    let auth = auth_store();
    auth.apply_login(
        "tok1",
        SessionUser {
            id: 1,
            name: "Ada".to_owned(),
            email: "a@x.com".to_owned(),
        },
        Role::Admin,
    );
    assert_eq!(bearer(&auth), "Bearer tok1");
}

#[test]
fn bearer_is_bare_prefix_when_signed_out() {
    let auth = auth_store();
    auth.initialize();
    assert_eq!(bearer(&auth), "Bearer ");
}
