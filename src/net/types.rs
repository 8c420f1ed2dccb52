//! REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Fields the backend sometimes omits are `Option` with defaults
//! rather than hard failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use crate::state::session::{Identity, Role};

/// Payload of a successful `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// The authenticated profile; stored verbatim by the session store.
    pub user: Identity,
    /// Opaque bearer token; stored verbatim by the session store.
    pub token: String,
}

/// A registered video camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Unique camera identifier.
    pub id: i64,
    /// Camera name; also the key of its stream endpoint.
    pub name: String,
    /// Human-readable placement, if recorded.
    #[serde(default)]
    pub location: Option<String>,
    /// Backend-reported status (e.g. `"active"`).
    #[serde(default)]
    pub status: Option<String>,
    /// Device address, if recorded.
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

/// Fields for registering or editing a camera.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CameraForm {
    pub name: String,
    pub location: String,
    pub ip: String,
    pub port: String,
}

/// A point of a zone polygon, in feed-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZonePoint {
    pub x: f64,
    pub y: f64,
}

/// A monitored polygon zone drawn over a camera feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique zone identifier.
    pub id: i64,
    /// Display name (e.g. `"Zone 2"`).
    pub name: String,
    /// Camera this zone belongs to.
    pub video_camera_id: i64,
    /// Polygon vertices in draw order.
    #[serde(default)]
    pub points: Vec<ZonePoint>,
}

/// Fields for creating a zone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZoneForm {
    pub name: String,
    pub video_camera_id: i64,
    pub points: Vec<ZonePoint>,
}

/// An alert raised by the backend's rule evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: i64,
    /// `"active"` until resolved.
    pub status: String,
    /// Backend-provided description, if any.
    #[serde(default)]
    pub message: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Source camera, when the alert is camera-scoped.
    #[serde(default)]
    pub camera_id: Option<i64>,
    #[serde(default)]
    pub camera_name: Option<String>,
    #[serde(default)]
    pub camera_location: Option<String>,
    /// Source zone, when the alert is zone-scoped.
    #[serde(default)]
    pub zone_id: Option<i64>,
    #[serde(default)]
    pub zone_name: Option<String>,
}

/// A monitored employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl Employee {
    /// Display name used in tables and avatar fallbacks.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields for registering or editing an employee.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
}

/// A security-personnel account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityUser {
    /// Unique user identifier.
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Fields for registering or editing a security account.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SecurityForm {
    pub email: String,
    pub phone_number: String,
}
