//! User moderation page: filtered list, detail view, suspend/unsuspend.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::user::{PageMeta, StatusFilter, User, UserFilters, UserStats};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::util::guard::{GuardPolicy, install_route_guard};

/// Map the status `<select>` choice onto a filter; `"all"` means no filter.
fn status_from_choice(choice: &str) -> Option<StatusFilter> {
    match choice {
        "active" => Some(StatusFilter::Active),
        "suspended" => Some(StatusFilter::Suspended),
        _ => None,
    }
}

/// Short status label for a list row.
fn row_status(user: &User) -> &'static str {
    if user.is_suspended {
        "suspended"
    } else if user.is_active {
        "active"
    } else {
        "inactive"
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(GuardPolicy::AdminOnly, &auth, notify, navigate);

    let state = auth.stream();
    let users = RwSignal::new(Vec::<User>::new());
    let meta = RwSignal::new(None::<PageMeta>);
    let stats = RwSignal::new(None::<UserStats>);
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let status_choice = RwSignal::new("all".to_owned());
    let page = RwSignal::new(1_u32);

    let load = {
        let auth = auth.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                loading.set(true);
                let filters = UserFilters {
                    search: Some(search.get_untracked()),
                    status: status_from_choice(&status_choice.get_untracked()),
                    page: Some(page.get_untracked()),
                    per_page: Some(20),
                    ..UserFilters::default()
                };
                leptos::task::spawn_local(async move {
                    match crate::net::users::fetch_users(&auth, &filters).await {
                        Ok(payload) => {
                            users.set(payload.data.data);
                            meta.set(Some(payload.data.meta));
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &auth;
            }
        }
    };
    load();

    #[cfg(feature = "hydrate")]
    {
        let auth_stats = auth.clone();
        leptos::task::spawn_local(async move {
            match crate::net::users::fetch_user_stats(&auth_stats).await {
                Ok(payload) => stats.set(Some(payload.data)),
                Err(err) => notify.report_api_error(&err),
            }
        });
    }

    // Suspend dialog state.
    let suspend_target = RwSignal::new(None::<(i64, String)>);
    let suspend_reason = RwSignal::new(String::new());
    // Detail dialog state.
    let detail = RwSignal::new(None::<User>);

    let on_apply = {
        let load = load.clone();
        move |_| {
            page.set(1);
            load();
        }
    };

    let on_unsuspend = {
        let auth = auth.clone();
        let load = load.clone();
        move |user_id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::unsuspend_user(&auth, user_id).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            load();
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, &load, user_id);
            }
        }
    };

    let on_show_detail = {
        let auth = auth.clone();
        move |user_id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::fetch_user(&auth, user_id).await {
                        Ok(payload) => detail.set(Some(payload.data)),
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, user_id);
            }
        }
    };

    let on_suspend_submit = {
        let auth = auth.clone();
        let load = load.clone();
        move |_| {
            let Some((user_id, _)) = suspend_target.get_untracked() else {
                return;
            };
            let reason = suspend_reason.get_untracked();
            if reason.trim().is_empty() {
                notify.error("A suspension reason is required");
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::users::suspend_user(&auth, user_id, reason.trim()).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            suspend_target.set(None);
                            load();
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, &load, user_id, reason);
            }
        }
    };

    view! {
        <div class="page users-page">
            <Navbar/>
            <Show
                when=move || state.get().is_admin()
                fallback=|| view! { <p class="page__redirect">"Redirecting to login..."</p> }
            >
                <h1>"Users"</h1>
                {move || {
                    stats
                        .get()
                        .map(|figures| {
                            view! {
                                <p class="users-page__stats">
                                    {format!(
                                        "{} total | {} active | {} suspended | {} pending verification",
                                        figures.total_users,
                                        figures.active_users,
                                        figures.suspended_users,
                                        figures.pending_verification,
                                    )}
                                </p>
                            }
                        })
                }}
                <div class="users-page__filters">
                    <input
                        class="input"
                        type="text"
                        placeholder="Search name or email"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="select"
                        prop:value=move || status_choice.get()
                        on:change=move |ev| status_choice.set(event_target_value(&ev))
                    >
                        <option value="all">"All statuses"</option>
                        <option value="active">"Active"</option>
                        <option value="suspended">"Suspended"</option>
                    </select>
                    <button class="btn" on:click=on_apply.clone()>
                        "Apply"
                    </button>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading users..."</p> }>
                    <table class="table users-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Status"</th>
                                <th>"Verification"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let on_show_detail = on_show_detail.clone();
                                let on_unsuspend = on_unsuspend.clone();
                                move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|user| {
                                        let user_id = user.id;
                                        let suspended = user.is_suspended;
                                        let target = (user.id, user.name.clone());
                                        let show_detail = on_show_detail.clone();
                                        let unsuspend = on_unsuspend.clone();
                                        view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{row_status(&user)}</td>
                                                <td>{user.verification_status.as_str()}</td>
                                                <td>
                                                    <button class="btn btn--small" on:click=move |_| show_detail(user_id)>
                                                        "Details"
                                                    </button>
                                                    <Show
                                                        when=move || suspended
                                                        fallback={
                                                            let target = target.clone();
                                                            move || {
                                                                let target = target.clone();
                                                                view! {
                                                                    <button
                                                                        class="btn btn--small btn--danger"
                                                                        on:click=move |_| {
                                                                            suspend_reason.set(String::new());
                                                                            suspend_target.set(Some(target.clone()));
                                                                        }
                                                                    >
                                                                        "Suspend"
                                                                    </button>
                                                                }
                                                            }
                                                        }
                                                    >
                                                        {
                                                            let unsuspend = unsuspend.clone();
                                                            view! {
                                                                <button class="btn btn--small" on:click=move |_| unsuspend(user_id)>
                                                                    "Unsuspend"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }
                            }
                        </tbody>
                    </table>
                    {move || {
                        meta.get()
                            .map(|page_meta| {
                                view! {
                                    <p class="users-page__meta">
                                        {format!(
                                            "Page {} of {} ({} users)",
                                            page_meta.current_page, page_meta.last_page, page_meta.total,
                                        )}
                                    </p>
                                }
                            })
                    }}
                </Show>
                <Show when=move || suspend_target.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| suspend_target.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                "Suspend "
                                {move || {
                                    suspend_target.get().map(|(_, name)| name).unwrap_or_default()
                                }}
                            </h2>
                            <label class="dialog__label">
                                "Reason"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || suspend_reason.get()
                                    on:input=move |ev| suspend_reason.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| suspend_target.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--danger" on:click=on_suspend_submit.clone()>
                                    "Suspend"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
                <Show when=move || detail.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| detail.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            {move || {
                                detail
                                    .get()
                                    .map(|user| {
                                        view! {
                                            <h2>{user.name.clone()}</h2>
                                            <p class="dialog__line">{user.email.clone()}</p>
                                            <p class="dialog__line">
                                                {user.city.clone()} ", " {user.country.clone()}
                                            </p>
                                            <p class="dialog__line">{user.bio.clone()}</p>
                                            <p class="dialog__line">
                                                "Joined " {user.created_at.clone()}
                                            </p>
                                            {user
                                                .suspension_reason
                                                .clone()
                                                .map(|reason| {
                                                    view! {
                                                        <p class="dialog__line dialog__danger">
                                                            "Suspended: " {reason}
                                                        </p>
                                                    }
                                                })}
                                        }
                                    })
                            }}
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| detail.set(None)>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
