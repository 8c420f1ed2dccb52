//! Individual alert page with a resolve action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;

/// Alert detail page — full alert record, resolve action, and a link to
/// the source camera when one is attached.
#[component]
pub fn AlertDetailPage() -> impl IntoView {
    let params = use_params_map();
    let alert_id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let alert = LocalResource::new(move || {
        let id = alert_id.get();
        async move {
            match id {
                Some(id) => api::fetch_alert(id).await,
                None => None,
            }
        }
    });
    let error = RwSignal::new(String::new());

    let on_resolve = move |_| {
        let Some(id) = alert_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_alert_status(id, "resolved").await {
                Ok(()) => alert.refetch(),
                Err(_) => error.set("Failed to resolve alert. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <div class="page__header-start">
                        <a href="/alerts" class="btn">"Back"</a>
                        <h1 class="page__title">"Alert"</h1>
                    </div>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        alert
                            .get()
                            .map(|record| match record {
                                None => view! {
                                    <p class="page__empty">"Alert not found."</p>
                                }
                                    .into_any(),
                                Some(record) => {
                                    let camera_link = record.camera_id.map(|camera_id| {
                                        view! {
                                            <a
                                                href=format!("/video-cameras/{camera_id}")
                                                class="btn"
                                            >
                                                "View camera"
                                            </a>
                                        }
                                    });
                                    let resolvable = record.status == "active";
                                    view! {
                                        <dl class="detail-list">
                                            <dt>"Status"</dt>
                                            <dd>{record.status.clone()}</dd>
                                            <dt>"Raised"</dt>
                                            <dd>
                                                {record.created_at.clone().unwrap_or_default()}
                                            </dd>
                                            <dt>"Camera"</dt>
                                            <dd>
                                                {record
                                                    .camera_name
                                                    .clone()
                                                    .unwrap_or_else(|| "—".to_owned())}
                                            </dd>
                                            <dt>"Zone"</dt>
                                            <dd>
                                                {record
                                                    .zone_name
                                                    .clone()
                                                    .unwrap_or_else(|| "—".to_owned())}
                                            </dd>
                                            <dt>"Message"</dt>
                                            <dd>
                                                {record.message.clone().unwrap_or_default()}
                                            </dd>
                                        </dl>
                                        <div class="page__actions">
                                            {camera_link}
                                            <Show when=move || resolvable>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=on_resolve
                                                >
                                                    "Mark resolved"
                                                </button>
                                            </Show>
                                        </div>
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
