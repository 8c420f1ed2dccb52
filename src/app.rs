//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::Guard;
use crate::pages::{
    alert_detail::AlertDetailPage, alerts::AlertsPage, camera_detail::CameraDetailPage,
    camera_form::CameraFormPage, cameras::CamerasPage, employee_form::EmployeeFormPage,
    employees::EmployeesPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    observer::ObserverPage, security::SecurityPage, security_form::SecurityFormPage,
    security_invitation::SecurityInvitationPage, settings::SettingsPage,
};
use crate::state;
use crate::state::session::{Role, Session};
use crate::util::guard::Access;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, runs the one-time startup restore, and
/// sets up client-side routing with a guard around every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    // One-time restore of the persisted session. Guards defer rendering
    // until this flips `initializing` off.
    Effect::new(move || {
        if session.with_untracked(Session::is_initializing) {
            state::session::restore(session);
        }
    });

    Effect::new(|| theme::apply(theme::read_preference()));

    view! {
        <Stylesheet id="leptos" href="/pkg/argus-ui.css"/>
        <Title text="Argus"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! {
                        <Guard access=Access::AnonymousOnly>
                            <LoginPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <HomePage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <HomePage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("observer")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <ObserverPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("video-cameras")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <CamerasPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("video-cameras"), StaticSegment("new"))
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <CameraFormPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("video-cameras"), ParamSegment("id"))
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <CameraDetailPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("alerts")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <AlertsPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("alerts"), ParamSegment("id"))
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <AlertDetailPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("employees")
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <EmployeesPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("employees"), StaticSegment("new"))
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <EmployeeFormPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(
                        StaticSegment("employees"),
                        ParamSegment("id"),
                        StaticSegment("edit"),
                    )
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <EmployeeFormPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("security")
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <SecurityPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("security"), StaticSegment("new"))
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <SecurityFormPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(StaticSegment("security"), StaticSegment("invitation"))
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <SecurityInvitationPage/>
                        </Guard>
                    }
                />
                <Route
                    path=(
                        StaticSegment("security"),
                        ParamSegment("id"),
                        StaticSegment("edit"),
                    )
                    view=|| view! {
                        <Guard access=Access::Role(Role::Admin)>
                            <SecurityFormPage/>
                        </Guard>
                    }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! {
                        <Guard access=Access::Authenticated>
                            <SettingsPage/>
                        </Guard>
                    }
                />
            </Routes>
        </Router>
    }
}
