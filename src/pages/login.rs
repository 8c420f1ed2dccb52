//! Combined login and registration entry page.
//!
//! FLOW
//! ====
//! One email field decides the branch: existing accounts continue to a
//! password step, new ones walk registration (password → contact details →
//! email verification) and are logged in automatically at the end. The
//! guard layer keeps authenticated users away from this page entirely.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::use_session;

/// Which form of the entry flow is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Step {
    #[default]
    Email,
    Password,
    RegisterPassword,
    RegisterDetails,
    RegisterVerify,
}

fn validate_email(input: &str) -> Result<String, &'static str> {
    let email = input.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn validate_password(input: &str) -> Result<String, &'static str> {
    if input.is_empty() {
        return Err("Enter your password.");
    }
    Ok(input.to_owned())
}

fn validate_password_pair(password: &str, confirmed: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Enter a password.");
    }
    if password != confirmed {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

fn validate_details(phone: &str, organization: &str) -> Result<(String, String), &'static str> {
    let phone = phone.trim();
    let organization = organization.trim();
    if phone.is_empty() {
        return Err("Please enter your phone number.");
    }
    if organization.is_empty() {
        return Err("Please enter your organization name.");
    }
    Ok((phone.to_owned(), organization.to_owned()))
}

fn validate_code(input: &str) -> Result<String, &'static str> {
    let code = input.trim();
    if code.is_empty() {
        return Err("Please enter the code.");
    }
    Ok(code.to_owned())
}

/// Login page with the multi-step login/registration form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let step = RwSignal::new(Step::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmed = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Step 1: decide login vs registration by whether the account exists.
    let on_submit_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        email.set(value.clone());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::check_email(&value).await {
                Ok(true) => step.set(Step::Password),
                Ok(false) => step.set(Step::RegisterPassword),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    // Step 2 (existing account): verify credentials and open a session.
    let on_submit_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let pass = match validate_password(&password.get()) {
            Ok(pass) => pass,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let address = email.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&address, &pass).await {
                    Ok(response) => {
                        // The anonymous-only guard on this route redirects
                        // to the dashboard once the session is set.
                        crate::state::session::login(session, response.user, response.token);
                    }
                    Err(_) => {
                        error.set("Login failed. Check your password.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pass;
    };

    // Registration step 1: choose a password.
    let on_submit_register_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        match validate_password_pair(&password.get(), &confirmed.get()) {
            Ok(pass) => {
                password.set(pass);
                step.set(Step::RegisterDetails);
            }
            Err(message) => error.set(message.to_owned()),
        }
    };

    // Registration step 2: contact details, then create the account.
    let on_submit_register_details = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (phone_value, org_value) = match validate_details(&phone.get(), &organization.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let address = email.get();
            let pass = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&address, &pass, &phone_value, &org_value).await {
                    Ok(()) => step.set(Step::RegisterVerify),
                    Err(_) => error.set("An error occurred. Please try again.".to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (phone_value, org_value);
    };

    // Registration step 3: verify the emailed code, then log straight in.
    let on_submit_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let code_value = match validate_code(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let address = email.get();
            let pass = password.get();
            leptos::task::spawn_local(async move {
                let verified = crate::net::api::verify_email(&address, &code_value).await;
                match verified {
                    Ok(()) => match crate::net::api::login(&address, &pass).await {
                        Ok(response) => {
                            crate::state::session::login(session, response.user, response.token);
                            return;
                        }
                        Err(_) => error.set(
                            "Looks like we couldn't log you in. Try again later.".to_owned(),
                        ),
                    },
                    Err(_) => error.set("An error occurred. Please try again.".to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = code_value;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__logo">"Argus"</h1>
                <p class="login-card__subtitle">"Employee monitoring console"</p>

                {move || match step.get() {
                    Step::Email => view! {
                        <form class="login-form" on:submit=on_submit_email>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@company.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Continue"
                            </button>
                        </form>
                    }.into_any(),
                    Step::Password => view! {
                        <form class="login-form" on:submit=on_submit_password>
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Sign In"
                            </button>
                        </form>
                    }.into_any(),
                    Step::RegisterPassword => view! {
                        <form class="login-form" on:submit=on_submit_register_password>
                            <p class="login-form__hint">"New account — choose a password."</p>
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || confirmed.get()
                                on:input=move |ev| confirmed.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit">
                                "Next"
                            </button>
                        </form>
                    }.into_any(),
                    Step::RegisterDetails => view! {
                        <form class="login-form" on:submit=on_submit_register_details>
                            <input
                                class="login-input"
                                type="tel"
                                placeholder="Phone number"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Organization"
                                prop:value=move || organization.get()
                                on:input=move |ev| organization.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Create account"
                            </button>
                        </form>
                    }.into_any(),
                    Step::RegisterVerify => view! {
                        <form class="login-form" on:submit=on_submit_verify>
                            <p class="login-form__hint">
                                "We sent a verification code to your email."
                            </p>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Verification code"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Verify and sign in"
                            </button>
                        </form>
                    }.into_any(),
                }}

                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
