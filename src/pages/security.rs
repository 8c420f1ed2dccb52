//! Security personnel roster (admin-only view).

use leptos::prelude::*;

use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;

/// Security personnel list page with invite, edit, and delete actions.
#[component]
pub fn SecurityPage() -> impl IntoView {
    let users =
        LocalResource::new(|| async { api::fetch_security_users().await.unwrap_or_default() });
    let error = RwSignal::new(String::new());

    let on_delete = move |security_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_security_user(security_id).await {
                Ok(()) => users.refetch(),
                Err(_) => error.set("Failed to delete account. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = security_id;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <h1 class="page__title">"Security Personnel"</h1>
                    <div class="page__actions">
                        <a href="/security/invitation" class="btn">
                            "Invite"
                        </a>
                        <a href="/security/new" class="btn btn--primary">
                            "+ Register"
                        </a>
                    </div>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        users
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="page__empty">
                                            "No security accounts yet. Send an invitation."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"Email"</th>
                                                    <th>"Phone"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|user| {
                                                        let id = user.id;
                                                        view! {
                                                            <tr>
                                                                <td>{user.email.clone()}</td>
                                                                <td>
                                                                    {user
                                                                        .phone_number
                                                                        .clone()
                                                                        .unwrap_or_default()}
                                                                </td>
                                                                <td class="table__actions">
                                                                    <a
                                                                        href=format!("/security/{id}/edit")
                                                                        class="btn"
                                                                    >
                                                                        "Edit"
                                                                    </a>
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        on:click=move |_| on_delete(id)
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
