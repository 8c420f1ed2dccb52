//! Camera registration form.

#[cfg(test)]
#[path = "camera_form_test.rs"]
mod camera_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::net::types::CameraForm;

fn validate_camera_form(form: &CameraForm) -> Result<CameraForm, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Camera name is required.");
    }
    if form.port.trim().parse::<u16>().is_err() && !form.port.trim().is_empty() {
        return Err("Port must be a number.");
    }
    Ok(CameraForm {
        name: name.to_owned(),
        location: form.location.trim().to_owned(),
        ip: form.ip.trim().to_owned(),
        port: form.port.trim().to_owned(),
    })
}

/// Camera registration page.
#[component]
pub fn CameraFormPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let ip = RwSignal::new(String::new());
    let port = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = CameraForm {
            name: name.get(),
            location: location.get(),
            ip: ip.get(),
            port: port.get(),
        };
        let form = match validate_camera_form(&draft) {
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
            leptos::task::spawn_local(async move {
                match crate::net::api::create_camera(&form).await {
                    Ok(()) => navigate("/video-cameras", NavigateOptions::default()),
                    Err(_) => {
                        error.set("Failed to register camera. Please try again.".to_owned());
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
                <h1 class="page__title">"Register Camera"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Location"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "IP address"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || ip.get()
                            on:input=move |ev| ip.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Port"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || port.get()
                            on:input=move |ev| port.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
            </main>
        </div>
    }
}
