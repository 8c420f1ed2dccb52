//! Neutral full-viewport loading placeholder.

use leptos::prelude::*;

/// Shown while the session restore gate is open and wherever a page has
/// nothing better to render yet.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__text">"Loading..."</p>
        </div>
    }
}
