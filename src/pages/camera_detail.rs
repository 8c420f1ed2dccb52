//! Individual camera page: live feed, zone overlay, and zone drawing.
//!
//! ZONES
//! =====
//! Zones are polygons in feed-pixel coordinates, drawn by clicking points
//! onto the feed while draw mode is active. A polygon needs at least three
//! points before it can be saved.

#[cfg(test)]
#[path = "camera_detail_test.rs"]
mod camera_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::LoadingScreen;
use crate::components::sidebar::Sidebar;
use crate::net::api;
use crate::net::types::{ZoneForm, ZonePoint};
use crate::state::session::use_session;
use crate::util::time;

/// Stream reload cadence. MJPEG connections die quietly; a periodic
/// cache-busted reload keeps the feed alive.
#[cfg(feature = "hydrate")]
const STREAM_REFRESH_MS: u32 = 120_000;

/// SVG `points` attribute for a polygon.
fn polygon_points_attr(points: &[ZonePoint]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A zone polygon needs at least three vertices.
fn zone_is_valid(points: &[ZonePoint]) -> bool {
    points.len() >= 3
}

/// Default name for the next zone on a camera.
fn next_zone_name(existing: usize) -> String {
    format!("Zone {}", existing + 1)
}

/// Camera detail page.
#[component]
pub fn CameraDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let camera_id = Signal::derive(move || {
        params.with(|map| map.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let camera = LocalResource::new(move || {
        let id = camera_id.get();
        async move {
            match id {
                Some(id) => api::fetch_camera(id).await,
                None => None,
            }
        }
    });
    let zones = LocalResource::new(move || {
        let id = camera_id.get();
        async move {
            match id {
                Some(id) => api::fetch_zones(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let stream_key = RwSignal::new(0.0_f64);
    let drawing = RwSignal::new(false);
    let draft_points = RwSignal::new(Vec::<ZonePoint>::new());
    let error = RwSignal::new(String::new());

    // Keep the stream fresh without user action.
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;
        let (stream, abort_handle) = futures::stream::abortable(
            gloo_timers::future::IntervalStream::new(STREAM_REFRESH_MS),
        );
        leptos::task::spawn_local(async move {
            let mut ticks = stream;
            while ticks.next().await.is_some() {
                stream_key.set(time::now_ms());
            }
        });
        on_cleanup(move || abort_handle.abort());
    }

    let on_refresh = move |_| {
        camera.refetch();
        stream_key.set(time::now_ms());
    };

    let on_start_draw = move |_| {
        error.set(String::new());
        draft_points.set(Vec::new());
        drawing.set(true);
    };

    let on_cancel_draw = move |_| {
        drawing.set(false);
        draft_points.set(Vec::new());
    };

    let on_feed_click = move |ev: leptos::ev::MouseEvent| {
        if !drawing.get() {
            return;
        }
        draft_points.update(|points| {
            points.push(ZonePoint {
                x: f64::from(ev.offset_x()),
                y: f64::from(ev.offset_y()),
            });
        });
    };

    let on_save_zone = move |_| {
        let points = draft_points.get();
        if !zone_is_valid(&points) {
            error.set("A valid zone must have at least 3 points.".to_owned());
            return;
        }
        let Some(id) = camera_id.get_untracked() else {
            return;
        };
        let existing = zones.get().map_or(0, |list| list.len());
        let form = ZoneForm {
            name: next_zone_name(existing),
            video_camera_id: id,
            points,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_zone(id, &form).await {
                Ok(()) => {
                    drawing.set(false);
                    draft_points.set(Vec::new());
                    zones.refetch();
                }
                Err(_) => error.set("Failed to save zone. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    let on_delete_zone = move |zone_id: i64| {
        let Some(id) = camera_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_zone(id, zone_id).await {
                Ok(()) => zones.refetch(),
                Err(_) => error.set("Failed to delete zone. Please try again.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, zone_id);
    };

    let stream_src = Signal::derive(move || {
        let key = stream_key.get();
        let name = camera
            .get()
            .flatten()
            .map(|detail| detail.name);
        session.with(|state| {
            match (name, state.credential()) {
                (Some(name), Some(token)) => Some(api::stream_url(&name, token, key)),
                _ => None,
            }
        })
    });

    view! {
        <div class="page">
            <Sidebar/>
            <main class="page__main">
                <header class="page__header">
                    <div class="page__header-start">
                        <a href="/video-cameras" class="btn">"Back"</a>
                        <h1 class="page__title">
                            {move || {
                                camera
                                    .get()
                                    .flatten()
                                    .map_or_else(
                                        || "Camera".to_owned(),
                                        |detail| detail.name,
                                    )
                            }}
                        </h1>
                    </div>
                    {move || {
                        if drawing.get() {
                            view! {
                                <div class="page__actions">
                                    <button class="btn" on:click=on_cancel_draw>"Cancel"</button>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || !zone_is_valid(&draft_points.get())
                                        on:click=on_save_zone
                                    >
                                        "Save Zone"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="page__actions">
                                    <button class="btn" on:click=on_refresh>"Refresh"</button>
                                    <button class="btn btn--primary" on:click=on_start_draw>
                                        "+ Add Zone"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </header>

                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>

                <div class="camera-detail">
                    <section class="camera-detail__feed">
                        <div
                            class="feed"
                            class=("feed--drawing", move || drawing.get())
                            on:click=on_feed_click
                        >
                            {move || {
                                stream_src
                                    .get()
                                    .map_or_else(
                                        || view! { <LoadingScreen/> }.into_any(),
                                        |src| {
                                            view! {
                                                <img
                                                    class="feed__stream"
                                                    src=src
                                                    alt="Live camera stream"
                                                />
                                            }
                                                .into_any()
                                        },
                                    )
                            }}
                            <svg class="feed__zones">
                                {move || {
                                    zones
                                        .get()
                                        .map(|list| {
                                            list.iter()
                                                .map(|zone| {
                                                    view! {
                                                        <polygon
                                                            class="feed__zone"
                                                            points=polygon_points_attr(&zone.points)
                                                        ></polygon>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                                {move || {
                                    let draft = draft_points.get();
                                    (!draft.is_empty())
                                        .then(|| {
                                            view! {
                                                <polygon
                                                    class="feed__zone feed__zone--draft"
                                                    points=polygon_points_attr(&draft)
                                                ></polygon>
                                            }
                                        })
                                }}
                            </svg>
                        </div>
                    </section>

                    <aside class="camera-detail__zones">
                        <h2 class="camera-detail__subtitle">"Zones"</h2>
                        <Suspense fallback=|| view! { <p>"Loading zones..."</p> }>
                            {move || {
                                zones
                                    .get()
                                    .map(|list| {
                                        if list.is_empty() {
                                            view! {
                                                <p class="page__empty">"No zones drawn yet."</p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <ul class="zone-list">
                                                    {list
                                                        .into_iter()
                                                        .map(|zone| {
                                                            let zone_id = zone.id;
                                                            view! {
                                                                <li class="zone-list__item">
                                                                    <span>{zone.name}</span>
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        on:click=move |_| on_delete_zone(
                                                                            zone_id,
                                                                        )
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </aside>
                </div>
            </main>
        </div>
    }
}
