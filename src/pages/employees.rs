//! Employee roster (admin-only view).

use leptos::prelude::*;

use crate::components::authenticated_image::AuthenticatedImage;
use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;

/// Employee list page with edit and delete actions.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    let employees =
        LocalResource::new(|| async { api::fetch_employees().await.unwrap_or_default() });
    let error = RwSignal::new(String::new());

    let on_delete = move |employee_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_employee(employee_id).await {
                Ok(()) => employees.refetch(),
                Err(_) => error.set("Failed to delete employee. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = employee_id;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <h1 class="page__title">"Employees"</h1>
                    <a href="/employees/new" class="btn btn--primary">
                        "+ Register Employee"
                    </a>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        employees
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="page__empty">"No employees registered."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th></th>
                                                    <th>"Name"</th>
                                                    <th>"Email"</th>
                                                    <th>"Position"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|employee| {
                                                        let id = employee.id;
                                                        let name = employee.full_name();
                                                        view! {
                                                            <tr>
                                                                <td>
                                                                    <AuthenticatedImage
                                                                        employee_id=id
                                                                        alt=name.clone()
                                                                    />
                                                                </td>
                                                                <td>{name}</td>
                                                                <td>
                                                                    {employee
                                                                        .email
                                                                        .clone()
                                                                        .unwrap_or_default()}
                                                                </td>
                                                                <td>
                                                                    {employee
                                                                        .position
                                                                        .clone()
                                                                        .unwrap_or_default()}
                                                                </td>
                                                                <td class="table__actions">
                                                                    <a
                                                                        href=format!(
                                                                            "/employees/{id}/edit",
                                                                        )
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
