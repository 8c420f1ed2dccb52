//! Employee registration and edit form.
//!
//! One page serves both routes: `/employees/new` starts blank,
//! `/employees/{id}/edit` loads the existing record first.

#[cfg(test)]
#[path = "employee_form_test.rs"]
mod employee_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::EmployeeForm;

fn validate_employee_form(form: &EmployeeForm) -> Result<EmployeeForm, &'static str> {
    let first = form.first_name.trim();
    let last = form.last_name.trim();
    let email = form.email.trim();
    if first.is_empty() || last.is_empty() {
        return Err("First and last name are required.");
    }
    if !email.is_empty() && !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(EmployeeForm {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        position: form.position.trim().to_owned(),
    })
}

/// Employee form page, creating or editing depending on the route.
#[component]
pub fn EmployeeFormPage() -> impl IntoView {
    let params = use_params_map();
    let employee_id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Edit mode: pre-fill from the existing record.
    let existing = LocalResource::new(move || {
        let id = employee_id.get();
        async move {
            match id {
                Some(id) => api::fetch_employee(id).await,
                None => None,
            }
        }
    });
    Effect::new(move || {
        if let Some(Some(employee)) = existing.get() {
            first_name.set(employee.first_name);
            last_name.set(employee.last_name);
            email.set(employee.email.unwrap_or_default());
            position.set(employee.position.unwrap_or_default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = EmployeeForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            position: position.get(),
        };
        let form = match validate_employee_form(&draft) {
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
            let id = employee_id.get_untracked();
            leptos::task::spawn_local(async move {
                let saved = match id {
                    Some(id) => api::update_employee(id, &form).await,
                    None => api::create_employee(&form).await,
                };
                match saved {
                    Ok(()) => navigate("/employees", NavigateOptions::default()),
                    Err(_) => {
                        error.set("Failed to save employee. Please try again.".to_owned());
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
                        if employee_id.get().is_some() {
                            "Edit Employee"
                        } else {
                            "Register Employee"
                        }
                    }}
                </h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "First name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Last name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Position"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || position.get()
                            on:input=move |ev| position.set(event_target_value(&ev))
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
