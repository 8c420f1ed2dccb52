//! Catch-all page for unknown routes.
//!
//! Shows the notice for five seconds, then sends the visitor to wherever
//! makes sense for their session: dashboard when logged in, login
//! otherwise. Role-guard denials land here too.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;

use crate::state::session::use_session;
use crate::util::guard::not_found_redirect_target;

/// How long the notice stays before redirecting.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 5_000;

/// Not-found page with a delayed redirect.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = use_session();

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
            let target =
                session.with_untracked(|state| not_found_redirect_target(state.is_authenticated()));
            navigate(target, NavigateOptions::default());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <div class="not-found">
            <p class="not-found__title">"404 Page not found"</p>
            <p class="not-found__hint">
                "You will be redirected to the right place in a few seconds..."
            </p>
        </div>
    }
}
