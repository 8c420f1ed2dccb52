//! The persisted session record in browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent string entries back the in-memory session: `token`
//! (bearer credential) and `user` (JSON-serialized identity). Written on
//! login, deleted on logout, read once at startup. Server-side builds
//! no-op so rendering stays deterministic.

use crate::state::session::Identity;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Read the persisted record. Both entries must be present and the
/// identity must parse; anything less restores nothing.
pub fn load_record() -> Option<(String, Identity)> {
    let token = load_token()?;
    let raw = read_item(USER_KEY)?;
    let identity = serde_json::from_str(&raw).ok()?;
    Some((token, identity))
}

/// Read just the bearer token, for attaching auth headers to requests.
pub fn load_token() -> Option<String> {
    read_item(TOKEN_KEY)
}

/// Persist both entries. Storage failures (disabled or full) surface as
/// missing entries on the next restore rather than being handled here.
pub fn save_record(token: &str, identity: &Identity) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(identity) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, identity);
    }
}

/// Delete both entries.
pub fn clear_record() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
