//! System-configuration management page.

#[cfg(test)]
#[path = "configurations_test.rs"]
mod configurations_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::configuration::{
    ConfigValueType, ConfigurationRequest, ConfigurationStats, SystemConfiguration,
};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::util::guard::{GuardPolicy, install_route_guard};

/// Map the type `<select>` choice onto a value type; defaults to string.
fn value_type_from_choice(choice: &str) -> ConfigValueType {
    match choice {
        "integer" => ConfigValueType::Integer,
        "decimal" => ConfigValueType::Decimal,
        "boolean" => ConfigValueType::Boolean,
        "json" => ConfigValueType::Json,
        _ => ConfigValueType::String,
    }
}

/// Fields shared by the create and edit dialogs.
#[derive(Clone, Debug, Default, PartialEq)]
struct ConfigForm {
    /// Backend id when editing an existing record.
    id: Option<i64>,
    key: String,
    value: String,
    type_choice: String,
    description: String,
}

impl ConfigForm {
    fn from_record(record: &SystemConfiguration) -> Self {
        Self {
            id: Some(record.id),
            key: record.key.clone(),
            value: record.value.clone(),
            type_choice: record.value_type.as_str().to_owned(),
            description: record.description.clone(),
        }
    }

    fn to_request(&self) -> ConfigurationRequest {
        ConfigurationRequest {
            key: self.key.trim().to_owned(),
            value: self.value.clone(),
            value_type: value_type_from_choice(&self.type_choice),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

#[component]
pub fn ConfigurationsPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(GuardPolicy::AdminOnly, &auth, notify, navigate);

    let state = auth.stream();
    let configs = RwSignal::new(Vec::<SystemConfiguration>::new());
    let stats = RwSignal::new(None::<ConfigurationStats>);
    let loading = RwSignal::new(true);
    let form = RwSignal::new(None::<ConfigForm>);
    let effective_value = RwSignal::new(None::<String>);

    let load = {
        let auth = auth.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                loading.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::configurations::fetch_configurations(&auth).await {
                        Ok(payload) => configs.set(payload.data),
                        Err(err) => notify.report_api_error(&err),
                    }
                    match crate::net::configurations::fetch_configuration_stats(&auth).await {
                        Ok(payload) => stats.set(Some(payload.data)),
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

    // Opening the editor also asks the backend for the value it currently
    // serves for the key, cast to the declared type.
    let on_edit = {
        let auth = auth.clone();
        move |record: SystemConfiguration| {
            form.set(Some(ConfigForm::from_record(&record)));
            effective_value.set(None);
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::configurations::fetch_configuration(&auth, &record.key).await
                    {
                        Ok(payload) => effective_value.set(Some(payload.value.to_string())),
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&auth, record);
            }
        }
    };

    let on_new = move |_| {
        effective_value.set(None);
        form.set(Some(ConfigForm {
            type_choice: "string".to_owned(),
            ..ConfigForm::default()
        }));
    };

    let on_save = {
        let auth = auth.clone();
        let load = load.clone();
        move |_| {
            let Some(current) = form.get_untracked() else {
                return;
            };
            if current.key.trim().is_empty() {
                notify.error("A configuration key is required");
                return;
            }
            let request = current.to_request();
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    let result = match current.id {
                        Some(config_id) => {
                            crate::net::configurations::update_configuration(
                                &auth, config_id, &request,
                            )
                            .await
                        }
                        None => {
                            crate::net::configurations::save_configuration(&auth, &request).await
                        }
                    };
                    match result {
                        Ok(payload) => {
                            notify.report_success(Some(&payload.message));
                            form.set(None);
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

    let on_delete = {
        let auth = auth.clone();
        let load = load.clone();
        move |key: String| {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::configurations::delete_configuration(&auth, &key).await {
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
                let _ = (&auth, &load, key);
            }
        }
    };

    let update_form = move |mutate: fn(&mut ConfigForm, String), value: String| {
        form.update(|current| {
            if let Some(current) = current.as_mut() {
                mutate(current, value);
            }
        });
    };

    view! {
        <div class="page configurations-page">
            <Navbar/>
            <Show
                when=move || state.get().is_admin()
                fallback=|| view! { <p class="page__redirect">"Redirecting to login..."</p> }
            >
                <h1>"System Configuration"</h1>
                {move || {
                    stats
                        .get()
                        .map(|figures| {
                            view! {
                                <p class="configurations-page__stats">
                                    {format!(
                                        "{} configurations | cache {} | last updated {}",
                                        figures.total_configurations,
                                        match figures.cache_status {
                                            models::configuration::CacheStatus::Active => "active",
                                            models::configuration::CacheStatus::Cleared => "cleared",
                                        },
                                        figures.last_updated,
                                    )}
                                </p>
                            }
                        })
                }}
                <button class="btn btn--primary" on:click=on_new>
                    "+ New Configuration"
                </button>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading configurations..."</p> }>
                    <table class="table configurations-page__table">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Value"</th>
                                <th>"Type"</th>
                                <th>"Description"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let on_edit = on_edit.clone();
                                let on_delete = on_delete.clone();
                                move || {
                                configs
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let key = record.key.clone();
                                        let edit_record = record.clone();
                                        let edit = on_edit.clone();
                                        let delete = on_delete.clone();
                                        view! {
                                            <tr>
                                                <td class="configurations-page__key">{record.key.clone()}</td>
                                                <td>{record.value.clone()}</td>
                                                <td>{record.value_type.as_str()}</td>
                                                <td>{record.description.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| edit(edit_record.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete(key.clone())
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
                <Show when=move || form.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| form.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                {move || {
                                    if form.get().is_some_and(|current| current.id.is_some()) {
                                        "Edit Configuration"
                                    } else {
                                        "Create Configuration"
                                    }
                                }}
                            </h2>
                            {move || {
                                effective_value
                                    .get()
                                    .map(|value| {
                                        view! {
                                            <p class="dialog__line">"Currently served value: " {value}</p>
                                        }
                                    })
                            }}
                            <label class="dialog__label">
                                "Key"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || form.get().map(|f| f.key).unwrap_or_default()
                                    on:input=move |ev| update_form(
                                        |f, v| f.key = v,
                                        event_target_value(&ev),
                                    )
                                />
                            </label>
                            <label class="dialog__label">
                                "Value"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || form.get().map(|f| f.value).unwrap_or_default()
                                    on:input=move |ev| update_form(
                                        |f, v| f.value = v,
                                        event_target_value(&ev),
                                    )
                                />
                            </label>
                            <label class="dialog__label">
                                "Type"
                                <select
                                    class="dialog__input"
                                    prop:value=move || {
                                        form.get().map(|f| f.type_choice).unwrap_or_default()
                                    }
                                    on:change=move |ev| update_form(
                                        |f, v| f.type_choice = v,
                                        event_target_value(&ev),
                                    )
                                >
                                    <option value="string">"string"</option>
                                    <option value="integer">"integer"</option>
                                    <option value="decimal">"decimal"</option>
                                    <option value="boolean">"boolean"</option>
                                    <option value="json">"json"</option>
                                </select>
                            </label>
                            <label class="dialog__label">
                                "Description"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || {
                                        form.get().map(|f| f.description).unwrap_or_default()
                                    }
                                    on:input=move |ev| update_form(
                                        |f, v| f.description = v,
                                        event_target_value(&ev),
                                    )
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| form.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" on:click=on_save.clone()>
                                    "Save"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
