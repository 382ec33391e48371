//! Route guards for authenticated and admin-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages install a guard on mount. The auth container is rehydrated before
//! the router mounts, so evaluation never races rehydration; a state that
//! has not been established yet is denied. The guard re-evaluates when auth
//! state changes, so a logout mid-session also redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, AuthStore};
use crate::state::notify::Notifier;

/// Terminal result of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied,
}

/// Predicate variants for guarded routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Any established session may enter.
    Authenticated,
    /// Only admin sessions may enter.
    AdminOnly,
}

impl GuardPolicy {
    /// Decide entry for `state`. Denial is control flow, not an error.
    #[must_use]
    pub fn evaluate(self, state: &AuthState) -> GuardDecision {
        let allowed = match self {
            Self::Authenticated => state.is_authenticated(),
            Self::AdminOnly => state.is_admin(),
        };
        if allowed {
            GuardDecision::Allowed
        } else {
            GuardDecision::Denied
        }
    }

    /// Message raised when this policy denies entry.
    #[must_use]
    pub fn denial_message(self) -> &'static str {
        match self {
            Self::Authenticated => "Please sign in to continue",
            Self::AdminOnly => "Admin access required",
        }
    }
}

/// Redirect to `/login` (and notify) whenever `policy` denies the current
/// auth state.
pub fn install_route_guard<F>(policy: GuardPolicy, auth: &AuthStore, notify: Notifier, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let stream = auth.stream();
    Effect::new(move || {
        let state = stream.get();
        if policy.evaluate(&state) == GuardDecision::Denied {
            notify.error(policy.denial_message());
            navigate("/login", NavigateOptions::default());
        }
    });
}
