//! # console
//!
//! Leptos + WASM single-page administration console for the messaging
//! platform: user moderation, content profiles, system configuration, and
//! platform analytics over the backend REST API.
//!
//! The crate is a thin presentation layer. The authentication/session core
//! (`state::auth`, `state::session`, `util::guard`, `state::notify`) is the
//! only stateful machinery; everything else binds pages to backend endpoints
//! through `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
