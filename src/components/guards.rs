//! Predicate-gated route wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the app shell wraps its page in a `Guard`, so the
//! render-or-redirect policy lives in one place (`util::guard`) instead of
//! per-page effects. Guards never mutate session state; they only read
//! predicates and redirect.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingScreen;
use crate::state::session::use_session;
use crate::util::guard::{Access, Decision, decide};

/// Render `children` only when the session satisfies `access`; otherwise
/// redirect. While the startup restore is still running, a neutral loading
/// view renders and no routing decision is made.
#[component]
pub fn Guard(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match decide(access, &session.get()) {
        Decision::Defer => view! { <LoadingScreen/> }.into_any(),
        Decision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        Decision::Render => children().into_any(),
    }
}
