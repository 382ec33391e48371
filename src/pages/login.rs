//! Login page for the admin console.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use models::Role;

use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;

/// Landing route after a successful login for `role`.
fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard",
        Role::Writer | Role::User => "/account",
    }
}

/// Pre-submit validation mirroring the form's required fields.
fn validate(identifier: &str, password: &str) -> Result<(), &'static str> {
    if identifier.is_empty() || !identifier.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // One outstanding login at a time; the button is disabled too.
        if busy.get() {
            return;
        }
        let identifier = email.get().trim().to_owned();
        let secret = password.get();
        if let Err(message) = validate(&identifier, &secret) {
            error_message.set(message.to_owned());
            return;
        }
        busy.set(true);
        error_message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = models::LoginRequest {
                    identifier,
                    password: secret,
                };
                match crate::net::api::login(&auth, notify, &request).await {
                    Ok(payload) => {
                        let route = Role::parse(&payload.role).map_or("/login", landing_route);
                        navigate(route, NavigateOptions::default());
                    }
                    Err(err) => {
                        error_message.set(err.detail());
                        notify.report_api_error(&err);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, secret, &auth, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Console"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-form__password">
                        <input
                            class="login-input"
                            type=move || if password_visible.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-form__toggle"
                            type="button"
                            on:click=move |_| password_visible.update(|visible| *visible = !*visible)
                        >
                            {move || if password_visible.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error_message.get().is_empty()>
                    <p class="login-message login-message--error">{move || error_message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
