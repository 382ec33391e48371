//! Account self-service page, reachable by every authenticated role.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the generic authenticated route: writers and regular users land
//! here after login, and the analytics section renders per role from the
//! auth stream.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::Role;
use models::account::{AccountDetails, UpdateAccountRequest, UpdatePasswordRequest};
use models::analytics::{ChartPeriod, UserAnalytics, WriterAnalytics};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::util::guard::{GuardPolicy, install_route_guard};

/// Validate the password-change form before submission.
fn password_error(current: &str, new: &str, confirm: &str) -> Option<&'static str> {
    if current.is_empty() {
        return Some("Enter your current password");
    }
    if new.len() < 6 {
        return Some("New password must be at least 6 characters");
    }
    if new != confirm {
        return Some("Password confirmation does not match");
    }
    None
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(GuardPolicy::Authenticated, &auth, notify, navigate);

    let state = auth.stream();
    let details = RwSignal::new(None::<AccountDetails>);
    let user_summary = RwSignal::new(None::<UserAnalytics>);
    let writer_summary = RwSignal::new(None::<WriterAnalytics>);

    // Editable detail fields, filled once the account record arrives.
    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    // Password form fields.
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let auth_load = auth.clone();
        let role = auth.snapshot().role;
        leptos::task::spawn_local(async move {
            match crate::net::account::fetch_account(&auth_load).await {
                Ok(payload) => {
                    name.set(payload.data.name.clone());
                    bio.set(payload.data.bio.clone());
                    country.set(payload.data.country.clone());
                    city.set(payload.data.city.clone());
                    details.set(Some(payload.data));
                }
                Err(err) => notify.report_api_error(&err),
            }
            match role {
                Some(Role::User) => {
                    match crate::net::analytics::fetch_user_analytics(&auth_load).await {
                        Ok(payload) => user_summary.set(Some(payload.data)),
                        Err(err) => notify.report_api_error(&err),
                    }
                }
                Some(Role::Writer) => {
                    match crate::net::analytics::fetch_writer_analytics(&auth_load).await {
                        Ok(payload) => writer_summary.set(Some(payload.data)),
                        Err(err) => notify.report_api_error(&err),
                    }
                    // The earnings series doubles as a sanity check that the
                    // chart endpoint stays in sync with the summary.
                    match crate::net::analytics::fetch_writer_earnings_chart(
                        &auth_load,
                        ChartPeriod::Monthly,
                    )
                    .await
                    {
                        Ok(payload) => {
                            let points = payload.data.earnings.unwrap_or_default().len();
                            leptos::logging::log!("earnings chart loaded: {points} points");
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                }
                _ => {}
            }
        });
    }

    let on_save_details = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let request = UpdateAccountRequest {
                name: Some(name.get_untracked()),
                bio: Some(bio.get_untracked()),
                country: Some(country.get_untracked()),
                city: Some(city.get_untracked()),
                ..UpdateAccountRequest::default()
            };
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::account::update_account(&auth, &request).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            details.set(Some(payload.data));
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, request);
            }
        }
    };

    let on_change_password = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let current = current_password.get_untracked();
            let new = new_password.get_untracked();
            let confirm = confirm_password.get_untracked();
            if let Some(message) = password_error(&current, &new, &confirm) {
                notify.error(message);
                return;
            }
            let request = UpdatePasswordRequest {
                current_password: current,
                password: new,
                password_confirmation: confirm,
            };
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::account::update_password(&auth, &request).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            current_password.set(String::new());
                            new_password.set(String::new());
                            confirm_password.set(String::new());
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, request);
            }
        }
    };

    view! {
        <div class="page account-page">
            <Navbar/>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| view! { <p class="page__redirect">"Redirecting to login..."</p> }
            >
                <h1>"My Account"</h1>
                {move || {
                    details
                        .get()
                        .map(|record| {
                            view! {
                                <p class="account-page__summary">
                                    {record.email.clone()} " | member since " {record.created_at.clone()}
                                    " | verification: " {record.verification_status.clone()}
                                </p>
                            }
                        })
                }}
                <form class="account-page__form" on:submit=on_save_details.clone()>
                    <h2>"Details"</h2>
                    <label class="form__label">
                        "Name"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Bio"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Country"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || country.get()
                            on:input=move |ev| country.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "City"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Save"
                    </button>
                </form>
                <form class="account-page__form" on:submit=on_change_password>
                    <h2>"Change Password"</h2>
                    <label class="form__label">
                        "Current password"
                        <input
                            class="input"
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "New password"
                        <input
                            class="input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Confirm new password"
                        <input
                            class="input"
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" type="submit">
                        "Update password"
                    </button>
                </form>
                <Show when=move || state.get().role == Some(Role::User)>
                    {move || {
                        user_summary
                            .get()
                            .map(|summary| {
                                view! {
                                    <section class="account-page__analytics">
                                        <h2>"My Activity"</h2>
                                        <p>
                                            "Spent " {summary.total_spending.clone()} " | balance "
                                            {summary.current_balance.to_string()} " tokens | "
                                            {summary.messages_sent.to_string()} " messages | "
                                            {summary.active_chats.to_string()} " active chats"
                                        </p>
                                    </section>
                                }
                            })
                    }}
                </Show>
                <Show when=move || state.get().role == Some(Role::Writer)>
                    {move || {
                        writer_summary
                            .get()
                            .map(|summary| {
                                view! {
                                    <section class="account-page__analytics">
                                        <h2>"My Earnings"</h2>
                                        <p>
                                            "Earned " {summary.total_earnings.clone()} " ("
                                            {summary.earnings_this_month.clone()} " this month) | "
                                            {summary.claimed_chats.to_string()} " claimed chats | "
                                            {summary.available_chats.to_string()} " available | avg response "
                                            {format!("{:.1} min", summary.average_response_time_minutes)}
                                        </p>
                                    </section>
                                }
                            })
                    }}
                </Show>
            </Show>
        </div>
    }
}
