//! Bearer-authenticated image display with initials fallback.
//!
//! Profile pictures sit behind the API's auth, so a plain `<img src>`
//! cannot load them. The bytes are fetched with the bearer header and
//! shown through an object URL instead.

#[cfg(test)]
#[path = "authenticated_image_test.rs"]
mod authenticated_image_test;

use leptos::prelude::*;

use crate::net::api;

/// First letter of each name part, for the avatar fallback.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();
    if letters.is_empty() {
        "?".to_owned()
    } else {
        letters.to_uppercase()
    }
}

/// An employee's profile picture, or their initials when the picture is
/// missing or fails to load.
#[component]
pub fn AuthenticatedImage(employee_id: i64, alt: String) -> impl IntoView {
    let picture = LocalResource::new(move || api::fetch_profile_picture(employee_id));
    let fallback_text = initials(&alt);
    let loading_fallback = fallback_text.clone();

    view! {
        <div class="avatar">
            <Suspense fallback=move || {
                view! { <span class="avatar__fallback">{loading_fallback.clone()}</span> }
            }>
                {move || {
                    picture
                        .get()
                        .map(|object_url| match object_url {
                            Some(src) => {
                                view! { <img class="avatar__image" src=src alt=alt.clone()/> }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <span class="avatar__fallback">{fallback_text.clone()}</span>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
