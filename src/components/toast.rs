//! Toast area rendering the notifier queue.

use leptos::prelude::*;

use crate::state::notify::Notifier;

/// Fixed overlay listing queued notifications with manual dismissal.
#[component]
pub fn ToastArea() -> impl IntoView {
    let notify = expect_context::<Notifier>();
    let state = notify.state();

    view! {
        <div class="toast-area">
            {move || {
                state
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.severity.css_class())>
                                <span class="toast__summary">{toast.summary.clone()}</span>
                                <span class="toast__detail">{toast.detail.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| state.update(|s| s.dismiss(id))
                                >
                                    "x"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
