//! # argus-client
//!
//! Leptos + WASM frontend for the Argus employee/security video-monitoring
//! console. Renders authenticated views over the monitoring REST backend:
//! login and registration, camera live feeds with zone drawing, alerts,
//! personnel management, and a dashboard with aggregate charts.
//!
//! The session store (`state::session`) and the route guard layer
//! (`util::guard` + `components::guards`) decide who sees what; everything
//! else is pages and components on top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
