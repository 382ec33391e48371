use super::*;
use models::{Role, SessionUser};

fn sample_user() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Ada".to_owned(),
        email: "a@x.com".to_owned(),
    }
}

fn authenticated(role: Role) -> AuthState {
    AuthState::authenticated("tok1".to_owned(), sample_user(), role)
}

fn memory_auth_store() -> AuthStore {
    use std::sync::Arc;

    use crate::state::session::{MemoryStorage, SessionStore};
    AuthStore::new(SessionStore::with_backend(Arc::new(MemoryStorage::new())))
}

#[test]
fn both_policies_deny_the_empty_state() {
    let state = AuthState::default();
    assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Denied);
    assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Denied);
}

#[test]
fn auth_guard_permits_any_established_session() {
    for role in [Role::Admin, Role::Writer, Role::User] {
        assert_eq!(
            GuardPolicy::Authenticated.evaluate(&authenticated(role)),
            GuardDecision::Allowed
        );
    }
}

#[test]
fn admin_guard_permits_only_admin_sessions() {
    assert_eq!(
        GuardPolicy::AdminOnly.evaluate(&authenticated(Role::Admin)),
        GuardDecision::Allowed
    );
    for role in [Role::Writer, Role::User] {
        assert_eq!(
            GuardPolicy::AdminOnly.evaluate(&authenticated(role)),
            GuardDecision::Denied
        );
    }
}

#[test]
fn partial_states_are_denied_by_both_policies() {
    // Token without a user: never produced by AuthStore, but a guard must
    // still fail closed on it.
    let token_only = AuthState {
        token: Some("tok1".to_owned()),
        ..AuthState::default()
    };
    let user_only = AuthState {
        user: Some(sample_user()),
        ..AuthState::default()
    };
    for state in [token_only, user_only] {
        assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Denied);
        assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Denied);
    }
}

#[test]
fn authenticated_session_without_admin_role_is_not_admin() {
    let mut state = authenticated(Role::Admin);
    state.role = None;
    assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Allowed);
    assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Denied);
}

#[test]
fn denial_messages_name_the_missing_privilege() {
    assert_eq!(GuardPolicy::Authenticated.denial_message(), "Please sign in to continue");
    assert_eq!(GuardPolicy::AdminOnly.denial_message(), "Admin access required");
}

// =============================================================
// end-to-end against the auth container
// =============================================================

#[test]
fn admin_login_opens_admin_routes() {
    let auth = memory_auth_store();
    auth.initialize();
    auth.apply_login("tok1", sample_user(), Role::Admin);

    let state = auth.snapshot();
    assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Allowed);
    assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Allowed);
}

#[test]
fn user_login_opens_only_generic_routes() {
    let auth = memory_auth_store();
    auth.initialize();
    auth.apply_login("tok1", sample_user(), Role::User);

    let state = auth.snapshot();
    assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Allowed);
    assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Denied);
}

#[test]
fn logout_closes_every_guarded_route() {
    let auth = memory_auth_store();
    auth.apply_login("tok1", sample_user(), Role::Admin);
    auth.apply_logout();

    let state = auth.snapshot();
    assert_eq!(GuardPolicy::Authenticated.evaluate(&state), GuardDecision::Denied);
    assert_eq!(GuardPolicy::AdminOnly.evaluate(&state), GuardDecision::Denied);
}
