//! Top navigation bar with role-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only links render from the auth stream, so a role change (login as
//! someone else, logout) updates navigation without a reload. Access to the
//! routes themselves is still enforced by the route guards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();
    let state = auth.stream();

    let display_name = move || state.get().user.map(|user| user.name).unwrap_or_default();
    let is_admin = move || state.get().is_admin();

    let on_logout = move |_| {
        auth.apply_logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Console"</span>
            <Show when=is_admin>
                <A href="/dashboard">"Dashboard"</A>
                <A href="/users">"Users"</A>
                <A href="/profiles">"Profiles"</A>
                <A href="/configurations">"Configurations"</A>
            </Show>
            <A href="/account">"Account"</A>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{display_name}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
