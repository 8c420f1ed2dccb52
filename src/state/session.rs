//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the sidebar, and identity-aware components read this state
//! from context to coordinate login redirects and role-dependent rendering.
//! All mutation goes through the operations below; components never touch
//! the fields directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::session_storage;

/// A role granted to the authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "SECURITY")]
    Security,
}

/// The authenticated user's profile as returned by `/users/login` and
/// persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Organization the user belongs to, if assigned.
    #[serde(default)]
    pub organization_id: Option<i64>,
    /// Granted roles. Role names this client does not know are skipped
    /// rather than failing the whole identity.
    #[serde(default, deserialize_with = "deserialize_known_roles")]
    pub roles: Vec<Role>,
}

/// In-memory record of the current authenticated identity and credential.
///
/// `identity` and `credential` are always set and cleared together: a
/// successful login sets both, logout clears both. `initializing` is true
/// only before the one-time startup restore completes.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    credential: Option<String>,
    identity: Option<Identity>,
    initializing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            credential: None,
            identity: None,
            initializing: true,
        }
    }
}

impl Session {
    /// Apply the startup restore result. Populates the session only when a
    /// complete record (token and identity) was found, and always ends the
    /// initializing phase.
    pub fn apply_restore(&mut self, record: Option<(String, Identity)>) {
        if let Some((credential, identity)) = record {
            self.credential = Some(credential);
            self.identity = Some(identity);
        }
        self.initializing = false;
    }

    /// Set identity and credential together after a successful login.
    pub fn apply_login(&mut self, identity: Identity, credential: String) {
        self.identity = Some(identity);
        self.credential = Some(credential);
    }

    /// Clear identity and credential together.
    pub fn apply_logout(&mut self) {
        self.identity = None;
        self.credential = None;
    }

    /// True only during the one-time startup restore.
    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the current user holds `role`. False when logged out.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles().is_some_and(|roles| roles.contains(&role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_security(&self) -> bool {
        self.has_role(Role::Security)
    }

    /// The role set, or `None` when not logged in. A logged-in user with no
    /// roles yields `Some(&[])`, which is a distinct state.
    pub fn roles(&self) -> Option<&[Role]> {
        self.identity.as_ref().map(|identity| identity.roles.as_slice())
    }

    /// The bearer token, when logged in.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// The authenticated profile, when logged in.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

/// Read the session signal from context.
///
/// Panics when called outside the tree that provides it; that is a wiring
/// bug, and a silent default session would mask it.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Restore the persisted session record into `session`. Runs once at
/// startup; route guards defer until it has completed.
pub fn restore(session: RwSignal<Session>) {
    let record = session_storage::load_record();
    session.update(|state| state.apply_restore(record));
}

/// Log in: persist the record, then set identity and credential in a single
/// signal update so guards never observe a half-written session.
pub fn login(session: RwSignal<Session>, identity: Identity, credential: String) {
    session_storage::save_record(&credential, &identity);
    session.update(|state| state.apply_login(identity, credential));
}

/// Log out: delete the persisted record and clear the session. Purely
/// local invalidation; no request is sent to the backend.
pub fn logout(session: RwSignal<Session>) {
    session_storage::clear_record();
    session.update(Session::apply_logout);
}

fn deserialize_known_roles<'de, D>(deserializer: D) -> Result<Vec<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let mut roles = Vec::with_capacity(raw.len());
    for value in raw {
        let name = value
            .as_str()
            .ok_or_else(|| D::Error::custom("expected role name string"))?;
        match name {
            "ADMIN" => roles.push(Role::Admin),
            "SECURITY" => roles.push(Role::Security),
            _ => {}
        }
    }
    Ok(roles)
}
