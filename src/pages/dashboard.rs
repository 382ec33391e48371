//! Admin dashboard showing the platform analytics snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the admin landing route. It loads the analytics snapshot once on
//! mount and the revenue series whenever the period changes. Chart drawing
//! is out of scope; series render as plain rows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::analytics::{AdminAnalytics, ChartData, ChartPeriod};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;
use crate::util::guard::{GuardPolicy, install_route_guard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(GuardPolicy::AdminOnly, &auth, notify, navigate);

    let state = auth.stream();
    let analytics = RwSignal::new(None::<AdminAnalytics>);
    let loading = RwSignal::new(true);
    let period_choice = RwSignal::new("monthly".to_owned());
    let chart = RwSignal::new(None::<ChartData>);

    #[cfg(feature = "hydrate")]
    {
        let auth_load = auth.clone();
        leptos::task::spawn_local(async move {
            match crate::net::analytics::fetch_admin_analytics(&auth_load).await {
                Ok(payload) => analytics.set(Some(payload.analytics)),
                Err(err) => notify.report_api_error(&err),
            }
            loading.set(false);
        });
    }

    let load_chart = {
        let auth = auth.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let period =
                    ChartPeriod::parse(&period_choice.get_untracked()).unwrap_or_default();
                leptos::task::spawn_local(async move {
                    match crate::net::analytics::fetch_admin_revenue_chart(&auth, period).await {
                        Ok(payload) => chart.set(Some(payload.data)),
                        Err(err) => notify.report_api_error(&err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &auth;
            }
        }
    };
    load_chart();

    let on_period_change = {
        let load_chart = load_chart.clone();
        move |ev: leptos::ev::Event| {
            period_choice.set(event_target_value(&ev));
            load_chart();
        }
    };

    view! {
        <div class="page dashboard-page">
            <Navbar/>
            <Show
                when=move || state.get().is_admin()
                fallback=|| view! { <p class="page__redirect">"Redirecting to login..."</p> }
            >
                <section class="dashboard-page__overview">
                    <h1>"Platform Overview"</h1>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <p>"Loading analytics..."</p> }
                    >
                        {move || {
                            analytics
                                .get()
                                .map(|data| {
                                    view! {
                                        <div class="stat-grid">
                                            <StatCard label="Total revenue" value=format!("${:.2}", data.total_revenue)/>
                                            <StatCard label="Revenue today" value=format!("${:.2}", data.revenue_today)/>
                                            <StatCard label="Revenue this month" value=format!("${:.2}", data.revenue_this_month)/>
                                            <StatCard label="Tokens in circulation" value=data.total_tokens_in_circulation.to_string()/>
                                            <StatCard label="Total users" value=data.total_users.to_string()/>
                                            <StatCard label="Active users today" value=data.active_users_today.to_string()/>
                                            <StatCard label="New users this week" value=data.new_users_this_week.to_string()/>
                                            <StatCard label="Active profiles" value=data.active_profiles.to_string()/>
                                            <StatCard label="Active writers today" value=data.active_writers_today.to_string()/>
                                            <StatCard label="Messages today" value=data.messages_today.to_string()/>
                                            <StatCard label="Active chats" value=data.active_chats.to_string()/>
                                            <StatCard label="Unclaimed chats" value=data.unclaimed_chats.to_string()/>
                                            <StatCard label="Pending reports" value=data.pending_reports.to_string()/>
                                            <StatCard label="Flagged messages" value=data.flagged_messages.to_string()/>
                                        </div>
                                        <div class="system-health">
                                            <h2>"System Health"</h2>
                                            <p>
                                                "Database: " {data.system_health.database_status.clone()}
                                                " | Storage: " {format!("{:.1}%", data.system_health.storage_usage_percentage)}
                                                " | Avg response: " {format!("{:.0} ms", data.system_health.average_response_time_ms)}
                                                " | Uptime: " {format!("{:.2}%", data.system_health.uptime_percentage)}
                                            </p>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </section>
                <section class="dashboard-page__revenue">
                    <h2>"Revenue"</h2>
                    <select
                        class="period-select"
                        prop:value=move || period_choice.get()
                        on:change=on_period_change.clone()
                    >
                        <option value="daily">"Daily"</option>
                        <option value="weekly">"Weekly"</option>
                        <option value="monthly">"Monthly"</option>
                    </select>
                    {move || {
                        chart
                            .get()
                            .map(|data| {
                                let values = data.revenue.unwrap_or_default();
                                let rows: Vec<_> = data
                                    .labels
                                    .iter()
                                    .zip(values.iter())
                                    .map(|(label, value)| {
                                        view! {
                                            <tr>
                                                <td>{label.clone()}</td>
                                                <td>{format!("${value:.2}")}</td>
                                            </tr>
                                        }
                                    })
                                    .collect();
                                view! {
                                    <table class="table table--compact">
                                        <thead>
                                            <tr>
                                                <th>"Period"</th>
                                                <th>"Revenue"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                }
                            })
                    }}
                </section>
            </Show>
        </div>
    }
}

/// One labeled figure in the stat grid.
#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
