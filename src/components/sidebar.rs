//! Sidebar navigation for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Item visibility comes from the same route-access table the guards use,
//! so the menu can never link to a view the guard would bounce.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state;
use crate::state::session::{Session, use_session};
use crate::util::guard::{Decision, LOGIN_PATH, access_for_path, decide};

/// One entry of the navigation menu.
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Menu entries in display order. Visibility is decided per session.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/dashboard" },
    NavItem { label: "Observer mode", path: "/observer" },
    NavItem { label: "Video Cameras", path: "/video-cameras" },
    NavItem { label: "Alerts", path: "/alerts" },
    NavItem { label: "Employees", path: "/employees" },
    NavItem { label: "Security Personnel", path: "/security" },
];

/// The entries `session` is allowed to open.
pub fn visible_nav_items(session: &Session) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| {
            access_for_path(item.path)
                .is_some_and(|access| decide(access, session) == Decision::Render)
        })
        .collect()
}

/// Sidebar with role-filtered navigation, the current account, and logout.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let email = move || {
        session.with(|state| {
            state
                .identity()
                .map(|identity| identity.email.clone())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        state::session::logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"Argus"</span>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    let current = location.pathname.get();
                    session.with(|state| {
                        visible_nav_items(state)
                            .into_iter()
                            .map(|item| {
                                let active = current == item.path
                                    || current.starts_with(&format!("{}/", item.path));
                                view! {
                                    <a
                                        href=item.path
                                        class=if active {
                                            "sidebar__link sidebar__link--active"
                                        } else {
                                            "sidebar__link"
                                        }
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__email" title="Signed-in account">{email}</span>
                <a href="/settings" class="sidebar__link">"Settings"</a>
                <button class="sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
