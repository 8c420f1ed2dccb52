//! Security invitation page.
//!
//! Generates a one-time invitation code, registers it with the backend,
//! and shows the join link to share. Codes expire server-side after 24
//! hours.

#[cfg(test)]
#[path = "security_invitation_test.rs"]
mod security_invitation_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::sidebar::Sidebar;

/// The shareable onboarding URL for an invitation code.
fn join_link(origin: &str, code: &str) -> String {
    format!("{origin}/security/register?code={code}")
}

fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Invitation page — one button, one link.
#[component]
pub fn SecurityInvitationPage() -> impl IntoView {
    let code = RwSignal::new(None::<String>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let fresh = Uuid::new_v4().to_string();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_invitation(&fresh).await {
                Ok(()) => code.set(Some(fresh)),
                Err(_) => {
                    error.set("Failed to generate invitation code. Please try again.".to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = fresh;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <div class="page__header-start">
                        <a href="/security" class="btn">"Back"</a>
                        <h1 class="page__title">"Invite Security Personnel"</h1>
                    </div>
                </header>
                <p class="page__hint">
                    "Click the button below to generate a unique invitation code."
                </p>
                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_generate>
                    "Generate invitation"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                {move || {
                    code.get()
                        .map(|value| {
                            let link = join_link(&current_origin(), &value);
                            view! {
                                <div class="invite-card">
                                    <p class="invite-card__code">{value}</p>
                                    <p class="invite-card__link">{link}</p>
                                    <p class="invite-card__note">
                                        "Note: the code is valid for 24 hours."
                                    </p>
                                </div>
                            }
                        })
                }}
            </main>
        </div>
    }
}
