//! Live camera feed tile with status badge and reload.
//!
//! The stream is an MJPEG endpoint loaded through an `<img>` tag; the
//! bearer token rides in the URL because image requests cannot carry
//! headers. Reload swaps in a fresh cache-busted URL.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Camera;
use crate::state::session::use_session;
use crate::util::time;

/// A single camera feed. `detailed` adds location and connection info
/// under the stream; the compact form fits the observer grid.
#[component]
pub fn CameraFeed(
    camera: Camera,
    #[prop(default = true)] detailed: bool,
    /// Parent-driven refresh key; bumping it reloads the stream.
    #[prop(into)]
    stream_key: Signal<f64>,
) -> impl IntoView {
    let session = use_session();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(false);
    // Local reload bumps combine with the parent's key.
    let local_key = RwSignal::new(0.0_f64);

    let name = camera.name.clone();
    let title = camera.name.clone();
    let alt = format!("Stream from {}", camera.name);
    let location = camera
        .location
        .unwrap_or_else(|| "No location specified".to_owned());
    let location_compact = location.clone();
    let ip = camera.ip.unwrap_or_else(|| "N/A".to_owned());
    let port = camera.port.map_or_else(|| "N/A".to_owned(), |p| p.to_string());

    let src = Signal::derive(move || {
        let key = stream_key.get() + local_key.get();
        session.with(|state| {
            state
                .credential()
                .map(|token| api::stream_url(&name, token, key))
        })
    });

    let on_reload = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        loading.set(true);
        error.set(false);
        local_key.set(time::now_ms());
    };

    let badge_class = move || {
        if loading.get() || error.get() {
            "camera-feed__badge camera-feed__badge--offline"
        } else {
            "camera-feed__badge camera-feed__badge--live"
        }
    };
    let badge_label = move || if loading.get() || error.get() { "OFFLINE" } else { "LIVE" };

    view! {
        <div class=if detailed { "camera-feed camera-feed--detailed" } else { "camera-feed" }>
            <div class="camera-feed__header">
                <h3 class="camera-feed__name">{title}</h3>
                <span class=badge_class>{badge_label}</span>
            </div>

            <div class="camera-feed__viewport">
                <Show when=move || loading.get()>
                    <div class="camera-feed__overlay">"Loading stream..."</div>
                </Show>
                {move || {
                    src.get()
                        .map(|stream| {
                            view! {
                                <img
                                    class="camera-feed__stream"
                                    class=("camera-feed__stream--hidden", move || error.get())
                                    src=stream
                                    alt=alt.clone()
                                    on:load=move |_| {
                                        loading.set(false);
                                        error.set(false);
                                    }
                                    on:error=move |_| {
                                        loading.set(false);
                                        error.set(true);
                                    }
                                />
                            }
                        })
                }}
                <Show when=move || error.get()>
                    <div class="camera-feed__overlay camera-feed__overlay--error">
                        <p>"Stream unavailable"</p>
                        <button class="btn" on:click=on_reload>"Reload"</button>
                    </div>
                </Show>
            </div>

            {if detailed {
                view! {
                    <div class="camera-feed__info">
                        <div class="camera-feed__meta">{location}</div>
                        <div class="camera-feed__net">
                            <span class="camera-feed__mono">{ip}</span>
                            <span class="camera-feed__mono">{port}</span>
                        </div>
                    </div>
                }
                    .into_any()
            } else {
                view! { <div class="camera-feed__meta">{location_compact}</div> }.into_any()
            }}
        </div>
    }
}
