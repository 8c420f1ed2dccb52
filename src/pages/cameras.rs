//! Camera management list.

use leptos::prelude::*;

use crate::components::camera_feed::CameraFeed;
use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;

/// Camera list page — detailed tiles linking to each camera's detail view,
/// with register and delete actions.
#[component]
pub fn CamerasPage() -> impl IntoView {
    let cameras = LocalResource::new(|| async { api::fetch_cameras().await.unwrap_or_default() });
    let stream_key = RwSignal::new(0.0_f64);
    let error = RwSignal::new(String::new());

    let on_delete = move |camera_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_camera(camera_id).await {
                Ok(()) => cameras.refetch(),
                Err(_) => error.set("Failed to delete camera. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = camera_id;
    };

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <h1 class="page__title">"Video Cameras"</h1>
                    <a href="/video-cameras/new" class="btn btn--primary">
                        "+ Register Camera"
                    </a>
                </header>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        cameras
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="page__empty">
                                            "No cameras yet. Register the first one."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="camera-grid">
                                            {list
                                                .into_iter()
                                                .map(|camera| {
                                                    let id = camera.id;
                                                    view! {
                                                        <div class="camera-grid__cell">
                                                            <a href=format!("/video-cameras/{id}")>
                                                                <CameraFeed
                                                                    camera=camera
                                                                    stream_key=stream_key
                                                                />
                                                            </a>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_delete(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
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
