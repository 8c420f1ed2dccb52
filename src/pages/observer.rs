//! Observer page — every camera feed at once.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use leptos::prelude::*;

use crate::components::camera_feed::CameraFeed;
use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::util::time;

/// Grid layout class by feed count; a lone camera gets the full width.
fn grid_class(camera_count: usize) -> &'static str {
    if camera_count <= 1 {
        "observer-grid observer-grid--single"
    } else if camera_count <= 4 {
        "observer-grid observer-grid--wide"
    } else {
        "observer-grid"
    }
}

/// Observer page — compact live tiles for every registered camera, with a
/// refresh-all control.
#[component]
pub fn ObserverPage() -> impl IntoView {
    let cameras = LocalResource::new(|| async { api::fetch_cameras().await.unwrap_or_default() });
    let stream_key = RwSignal::new(0.0_f64);

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <h1 class="page__title">"Observer mode"</h1>
                    <button
                        class="btn"
                        on:click=move |_| stream_key.set(time::now_ms())
                    >
                        "Refresh all"
                    </button>
                </header>
                <Suspense fallback=|| view! { <LoadingScreen/> }>
                    {move || {
                        cameras
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="page__empty">"No cameras registered yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    let count = list.len();
                                    view! {
                                        <div class=grid_class(count)>
                                            {list
                                                .into_iter()
                                                .map(|camera| {
                                                    view! {
                                                        <CameraFeed
                                                            camera=camera
                                                            detailed=false
                                                            stream_key=stream_key
                                                        />
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
