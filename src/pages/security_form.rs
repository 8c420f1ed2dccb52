//! Security account registration and edit form.

#[cfg(test)]
#[path = "security_form_test.rs"]
mod security_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::SecurityForm;

fn validate_security_form(form: &SecurityForm) -> Result<SecurityForm, &'static str> {
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(SecurityForm {
        email: email.to_owned(),
        phone_number: form.phone_number.trim().to_owned(),
    })
}

/// Security account form page, creating or editing depending on the route.
#[component]
pub fn SecurityFormPage() -> impl IntoView {
    let params = use_params_map();
    let security_id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let existing = LocalResource::new(move || {
        let id = security_id.get();
        async move {
            match id {
                Some(id) => api::fetch_security_user(id).await,
                None => None,
            }
        }
    });
    Effect::new(move || {
        if let Some(Some(user)) = existing.get() {
            email.set(user.email);
            phone.set(user.phone_number.unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = SecurityForm {
            email: email.get(),
            phone_number: phone.get(),
        };
        let form = match validate_security_form(&draft) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let id = security_id.get_untracked();
            leptos::task::spawn_local(async move {
                let saved = match id {
                    Some(id) => api::update_security_user(id, &form).await,
                    None => api::create_security_user(&form).await,
                };
                match saved {
                    Ok(()) => navigate("/security", NavigateOptions::default()),
                    Err(_) => {
                        error.set("Failed to save account. Please try again.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <h1 class="page__title">
                    {move || {
                        if security_id.get().is_some() {
                            "Edit Security Account"
                        } else {
                            "Register Security Account"
                        }
                    }}
                </h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Phone number"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </form>
            </main>
        </div>
    }
}
