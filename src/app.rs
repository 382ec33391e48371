//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it constructs the session store, the auth
//! container, and the notifier exactly once, rehydrates the auth container,
//! and only then mounts the router. Guards therefore never evaluate a
//! pre-rehydration state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastArea;
use crate::pages::{
    account::AccountPage, configurations::ConfigurationsPage, dashboard::DashboardPage,
    login::LoginPage, profiles::ProfilesPage, users::UsersPage,
};
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and notification contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Rehydrate before the router mounts so guard evaluation is never racing
    // the persisted-session read.
    let auth = AuthStore::new(SessionStore::for_runtime());
    auth.initialize();
    let notify = Notifier::new();

    provide_context(auth);
    provide_context(notify);

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="Admin Console"/>

        <ToastArea/>
        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("profiles") view=ProfilesPage/>
                <Route path=StaticSegment("configurations") view=ConfigurationsPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}
