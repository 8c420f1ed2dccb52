//! Route access policy and the guard decision function.
//!
//! DESIGN
//! ======
//! Which routes need which session is a table of route prefixes, and the
//! render-or-redirect choice is one pure function over it, so both stay
//! testable as plain data. The `Guard` component and the sidebar consume
//! the same table.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

/// Destination for unauthenticated users hitting a protected route.
pub const LOGIN_PATH: &str = "/login";
/// Landing view for authenticated users.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Destination for authenticated users lacking a required role.
pub const NOT_PERMITTED_PATH: &str = "/404";

/// Session requirement for rendering a route subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render only while logged out; authenticated users are sent to the
    /// dashboard instead of re-entering login.
    AnonymousOnly,
    /// Render only with a logged-in user.
    Authenticated,
    /// Render only with a logged-in user holding the role. An
    /// unauthenticated user is sent to login, not to the not-permitted
    /// destination.
    Role(Role),
}

/// What the router should do with a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested subtree.
    Render,
    /// Navigate elsewhere, leaving session state unchanged.
    Redirect(&'static str),
    /// Session restore has not completed; show a neutral placeholder and
    /// re-evaluate once it has.
    Defer,
}

/// Route prefix → required access, in match order.
pub const ROUTE_ACCESS: &[(&str, Access)] = &[
    ("/login", Access::AnonymousOnly),
    ("/dashboard", Access::Authenticated),
    ("/observer", Access::Authenticated),
    ("/video-cameras", Access::Authenticated),
    ("/alerts", Access::Authenticated),
    ("/settings", Access::Authenticated),
    ("/employees", Access::Role(Role::Admin)),
    ("/security", Access::Role(Role::Admin)),
];

/// Look up the access requirement for a path by route prefix. `None` means
/// the path has no entry and falls through to the catch-all route.
pub fn access_for_path(path: &str) -> Option<Access> {
    ROUTE_ACCESS
        .iter()
        .find(|(prefix, _)| {
            path == *prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .map(|(_, access)| *access)
}

/// Decide whether a route with `access` renders for `session`.
///
/// No decision is made while the session is still restoring; every guard
/// defers behind the same loading view until `restore()` has run.
pub fn decide(access: Access, session: &Session) -> Decision {
    if session.is_initializing() {
        return Decision::Defer;
    }
    match access {
        Access::AnonymousOnly => {
            if session.is_authenticated() {
                Decision::Redirect(DASHBOARD_PATH)
            } else {
                Decision::Render
            }
        }
        Access::Authenticated => {
            if session.is_authenticated() {
                Decision::Render
            } else {
                Decision::Redirect(LOGIN_PATH)
            }
        }
        Access::Role(role) => {
            if !session.is_authenticated() {
                Decision::Redirect(LOGIN_PATH)
            } else if session.has_role(role) {
                Decision::Render
            } else {
                Decision::Redirect(NOT_PERMITTED_PATH)
            }
        }
    }
}

/// Redirect target for the catch-all route once its notice times out.
pub fn not_found_redirect_target(authenticated: bool) -> &'static str {
    if authenticated { DASHBOARD_PATH } else { LOGIN_PATH }
}
