//! Content-profile management page.

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::profile::{
    AssignWritersRequest, CreateProfileRequest, OnlineStatusRequest, Profile, ProfileStatus,
    UpdateProfileRequest,
};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::util::guard::{GuardPolicy, install_route_guard};

/// Map the status `<select>` choice onto a filter; `"all"` means no filter.
fn status_from_choice(choice: &str) -> Option<ProfileStatus> {
    match choice {
        "active" => Some(ProfileStatus::Active),
        "inactive" => Some(ProfileStatus::Inactive),
        _ => None,
    }
}

/// Parse a comma-separated writer id list, ignoring blanks and junk.
fn parse_writer_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(GuardPolicy::AdminOnly, &auth, notify, navigate);

    let state = auth.stream();
    let profiles = RwSignal::new(Vec::<Profile>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let status_choice = RwSignal::new("all".to_owned());
    let featured_only = RwSignal::new(false);

    let load = {
        let auth = auth.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                loading.set(true);
                let featured = featured_only.get_untracked();
                let status = status_from_choice(&status_choice.get_untracked());
                let query = search.get_untracked();
                leptos::task::spawn_local(async move {
                    let result = if featured {
                        crate::net::profiles::fetch_featured_profiles(&auth).await
                    } else {
                        crate::net::profiles::fetch_profiles(&auth, 1, 20, status, Some(&query))
                            .await
                    };
                    match result {
                        Ok(items) => profiles.set(items),
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

    // Create dialog state.
    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_age = RwSignal::new(String::new());
    let new_bio = RwSignal::new(String::new());
    let new_country = RwSignal::new(String::new());
    let new_city = RwSignal::new(String::new());
    // Delete and assign dialog state.
    let delete_target = RwSignal::new(None::<(i64, String)>);
    let assign_target = RwSignal::new(None::<(i64, String)>);
    let assign_ids = RwSignal::new(String::new());

    let on_apply = {
        let load = load.clone();
        move |_| load()
    };

    let on_toggle_featured_filter = {
        let load = load.clone();
        move |_| {
            featured_only.update(|value| *value = !*value);
            load();
        }
    };

    let on_create_submit = {
        let auth = auth.clone();
        let load = load.clone();
        move |_| {
            let name = new_name.get_untracked().trim().to_owned();
            let Ok(age) = new_age.get_untracked().trim().parse::<u32>() else {
                notify.error("Age must be a number");
                return;
            };
            if name.is_empty() {
                notify.error("A profile name is required");
                return;
            }
            let request = CreateProfileRequest {
                name,
                age,
                bio: new_bio.get_untracked(),
                interests: Vec::new(),
                country: new_country.get_untracked(),
                city: new_city.get_untracked(),
            };
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::profiles::create_profile(&auth, &request).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            show_create.set(false);
                            load();
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, &load, request);
            }
        }
    };

    let on_toggle_online = {
        let auth = auth.clone();
        let load = load.clone();
        move |profile_id: i64, currently_online: bool| {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                let request = OnlineStatusRequest {
                    is_online: !currently_online,
                };
                leptos::task::spawn_local(async move {
                    match crate::net::profiles::set_online_status(&auth, profile_id, &request).await
                    {
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
                let _ = (&auth, &load, profile_id, currently_online);
            }
        }
    };

    let on_toggle_featured = {
        let auth = auth.clone();
        let load = load.clone();
        move |profile_id: i64, currently_featured: bool| {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                let request = UpdateProfileRequest {
                    is_featured: Some(!currently_featured),
                    ..UpdateProfileRequest::default()
                };
                leptos::task::spawn_local(async move {
                    match crate::net::profiles::update_profile(&auth, profile_id, &request).await {
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
                let _ = (&auth, &load, profile_id, currently_featured);
            }
        }
    };

    let on_delete_submit = {
        let auth = auth.clone();
        let load = load.clone();
        move |_| {
            let Some((profile_id, _)) = delete_target.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::profiles::delete_profile(&auth, profile_id).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            delete_target.set(None);
                            load();
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, &load, profile_id);
            }
        }
    };

    let on_assign_submit = {
        let auth = auth.clone();
        move |_| {
            let Some((profile_id, _)) = assign_target.get_untracked() else {
                return;
            };
            let writer_ids = parse_writer_ids(&assign_ids.get_untracked());
            if writer_ids.is_empty() {
                notify.error("Enter at least one writer id");
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let request = AssignWritersRequest { writer_ids };
                leptos::task::spawn_local(async move {
                    match crate::net::profiles::assign_writers(&auth, profile_id, &request).await {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            assign_target.set(None);
                        }
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, profile_id, writer_ids);
            }
        }
    };

    view! {
        <div class="page profiles-page">
            <Navbar/>
            <Show
                when=move || state.get().is_admin()
                fallback=|| view! { <p class="page__redirect">"Redirecting to login..."</p> }
            >
                <h1>"Profiles"</h1>
                <div class="profiles-page__filters">
                    <input
                        class="input"
                        type="text"
                        placeholder="Search profiles"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="select"
                        prop:value=move || status_choice.get()
                        on:change=move |ev| status_choice.set(event_target_value(&ev))
                    >
                        <option value="all">"All"</option>
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </select>
                    <button class="btn" on:click=on_apply.clone()>
                        "Apply"
                    </button>
                    <button class="btn" on:click=on_toggle_featured_filter>
                        {move || if featured_only.get() { "All profiles" } else { "Featured only" }}
                    </button>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Profile"
                    </button>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading profiles..."</p> }>
                    <table class="table profiles-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Location"</th>
                                <th>"Chats"</th>
                                <th>"Earnings"</th>
                                <th>"Flags"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let on_toggle_online = on_toggle_online.clone();
                                let on_toggle_featured = on_toggle_featured.clone();
                                move || {
                                profiles
                                    .get()
                                    .into_iter()
                                    .map(|profile| {
                                        let profile_id = profile.id;
                                        let online = profile.is_online;
                                        let featured = profile.is_featured;
                                        let delete_entry = (profile.id, profile.name.clone());
                                        let assign_entry = (profile.id, profile.name.clone());
                                        let toggle_online = on_toggle_online.clone();
                                        let toggle_featured = on_toggle_featured.clone();
                                        view! {
                                            <tr>
                                                <td>{profile.name.clone()}</td>
                                                <td>{format!("{}, {}", profile.city, profile.country)}</td>
                                                <td>{profile.total_chats.to_string()}</td>
                                                <td>{profile.total_earnings.clone()}</td>
                                                <td>
                                                    {format!(
                                                        "{}{}",
                                                        if profile.is_online { "online " } else { "" },
                                                        if profile.is_featured { "featured" } else { "" },
                                                    )}
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| toggle_online(profile_id, online)
                                                    >
                                                        {if online { "Set offline" } else { "Set online" }}
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| toggle_featured(profile_id, featured)
                                                    >
                                                        {if featured { "Unfeature" } else { "Feature" }}
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            assign_ids.set(String::new());
                                                            assign_target.set(Some(assign_entry.clone()));
                                                        }
                                                    >
                                                        "Writers"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete_target.set(Some(delete_entry.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }
                            }
                        </tbody>
                    </table>
                </Show>
                <Show when=move || show_create.get()>
                    <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Create Profile"</h2>
                            <label class="dialog__label">
                                "Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || new_name.get()
                                    on:input=move |ev| new_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Age"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    prop:value=move || new_age.get()
                                    on:input=move |ev| new_age.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Bio"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || new_bio.get()
                                    on:input=move |ev| new_bio.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "Country"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || new_country.get()
                                    on:input=move |ev| new_country.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__label">
                                "City"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || new_city.get()
                                    on:input=move |ev| new_city.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| show_create.set(false)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" on:click=on_create_submit.clone()>
                                    "Create"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
                <Show when=move || delete_target.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| delete_target.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                "Delete "
                                {move || delete_target.get().map(|(_, name)| name).unwrap_or_default()}
                            </h2>
                            <p class="dialog__danger">
                                "This permanently removes the profile and its gallery."
                            </p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| delete_target.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--danger" on:click=on_delete_submit.clone()>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
                <Show when=move || assign_target.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| assign_target.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                "Assign writers to "
                                {move || assign_target.get().map(|(_, name)| name).unwrap_or_default()}
                            </h2>
                            <label class="dialog__label">
                                "Writer ids (comma-separated)"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="12, 15, 31"
                                    prop:value=move || assign_ids.get()
                                    on:input=move |ev| assign_ids.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| assign_target.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" on:click=on_assign_submit.clone()>
                                    "Assign"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
