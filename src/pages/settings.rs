//! Settings page: appearance and account.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::session::use_session;
use crate::util::theme;

/// Settings page with the dark-mode toggle and the signed-in account.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let dark = RwSignal::new(theme::read_preference());

    let on_toggle = move |_| {
        let next = theme::toggle(dark.get());
        dark.set(next);
    };

    let email = move || {
        session.with(|state| {
            state
                .identity()
                .map(|identity| identity.email.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <h1 class="page__title">"Settings"</h1>
                <section class="settings-section">
                    <h2 class="settings-section__title">"Appearance"</h2>
                    <label class="settings-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || dark.get()
                            on:change=on_toggle
                        />
                        "Dark mode"
                    </label>
                </section>
                <section class="settings-section">
                    <h2 class="settings-section__title">"Account"</h2>
                    <p class="settings-section__row">{email}</p>
                </section>
            </main>
        </div>
    }
}
