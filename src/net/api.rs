//! REST helpers for communicating with the monitoring backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from the persisted session attached to every request.
//! Server-side (SSR): stubs returning `None`/`Err` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade page behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Alert, Camera, CameraForm, Employee, EmployeeForm, LoginResponse, SecurityForm, SecurityUser,
    Zone, ZoneForm,
};

const API_BASE: &str = "/api";

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Live stream endpoint for a camera. The token travels as a query
/// parameter because the stream is loaded through an `<img>` tag, which
/// cannot carry headers; `cache_buster` defeats browser image caching.
pub fn stream_url(camera_name: &str, token: &str, cache_buster: f64) -> String {
    format!("{API_BASE}/video-cameras/{camera_name}/stream?token={token}&t={cache_buster:.0}")
}

#[cfg(feature = "hydrate")]
fn bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session_storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::get(&url(path)))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<T>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        None
    }
}

async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::post(&url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {}", resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err("not available on server".to_owned())
    }
}

async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::post(&url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err("not available on server".to_owned())
    }
}

async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::put(&url(path)))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err("not available on server".to_owned())
    }
}

async fn delete(path: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::delete(&url(path)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err("not available on server".to_owned())
    }
}

// ---------------------------------------------------------------
// Auth
// ---------------------------------------------------------------

/// Verify credentials; the returned identity and token are stored verbatim
/// by the session store.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    post_json(
        "/users/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// Whether an account exists for `email`. Drives the login-vs-register
/// branch of the entry form.
pub async fn check_email(email: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/users/check-email"))
            .json(&serde_json::json!({ "email": email }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(format!("request failed: {status}")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

pub async fn register(
    email: &str,
    password: &str,
    phone_number: &str,
    organization: &str,
) -> Result<(), String> {
    post_empty(
        "/users/register",
        &serde_json::json!({
            "email": email,
            "password": password,
            "phoneNumber": phone_number,
            "organization": organization,
        }),
    )
    .await
}

pub async fn verify_email(email: &str, code: &str) -> Result<(), String> {
    post_empty(
        "/users/verify-email",
        &serde_json::json!({ "email": email, "code": code }),
    )
    .await
}

// ---------------------------------------------------------------
// Cameras
// ---------------------------------------------------------------

pub async fn fetch_cameras() -> Option<Vec<Camera>> {
    get_json("/video-cameras").await
}

pub async fn fetch_camera(camera_id: i64) -> Option<Camera> {
    get_json(&format!("/video-cameras/{camera_id}")).await
}

pub async fn create_camera(form: &CameraForm) -> Result<(), String> {
    post_empty("/video-cameras", form).await
}

pub async fn update_camera(camera_id: i64, form: &CameraForm) -> Result<(), String> {
    put_json(&format!("/video-cameras/{camera_id}"), form).await
}

pub async fn delete_camera(camera_id: i64) -> Result<(), String> {
    delete(&format!("/video-cameras/{camera_id}")).await
}

// ---------------------------------------------------------------
// Zones
// ---------------------------------------------------------------

pub async fn fetch_zones(camera_id: i64) -> Option<Vec<Zone>> {
    get_json(&format!("/video-cameras/{camera_id}/zones")).await
}

pub async fn create_zone(camera_id: i64, form: &ZoneForm) -> Result<(), String> {
    post_empty(&format!("/video-cameras/{camera_id}/zones"), form).await
}

pub async fn delete_zone(camera_id: i64, zone_id: i64) -> Result<(), String> {
    delete(&format!("/video-cameras/{camera_id}/zones/{zone_id}")).await
}

// ---------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------

pub async fn fetch_alerts() -> Option<Vec<Alert>> {
    get_json("/alerts").await
}

pub async fn fetch_alert(alert_id: i64) -> Option<Alert> {
    get_json(&format!("/alerts/{alert_id}")).await
}

pub async fn update_alert_status(alert_id: i64, status: &str) -> Result<(), String> {
    put_json(
        &format!("/alerts/{alert_id}"),
        &serde_json::json!({ "status": status }),
    )
    .await
}

// ---------------------------------------------------------------
// Employees
// ---------------------------------------------------------------

pub async fn fetch_employees() -> Option<Vec<Employee>> {
    get_json("/employees").await
}

pub async fn fetch_employee(employee_id: i64) -> Option<Employee> {
    get_json(&format!("/employees/{employee_id}")).await
}

pub async fn create_employee(form: &EmployeeForm) -> Result<(), String> {
    post_empty("/employees", form).await
}

pub async fn update_employee(employee_id: i64, form: &EmployeeForm) -> Result<(), String> {
    put_json(&format!("/employees/{employee_id}"), form).await
}

pub async fn delete_employee(employee_id: i64) -> Result<(), String> {
    delete(&format!("/employees/{employee_id}")).await
}

/// Fetch an employee's profile picture with the bearer header and expose
/// it as an object URL, since `<img>` tags cannot carry auth headers.
pub async fn fetch_profile_picture(employee_id: i64) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::get(&url(&format!(
            "/employees/{employee_id}/profile-picture"
        ))))
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        let bytes = resp.binary().await.ok()?;
        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = employee_id;
        None
    }
}

// ---------------------------------------------------------------
// Security personnel
// ---------------------------------------------------------------

pub async fn fetch_security_users() -> Option<Vec<SecurityUser>> {
    get_json("/users/security").await
}

pub async fn fetch_security_user(security_id: i64) -> Option<SecurityUser> {
    get_json(&format!("/users/security/{security_id}")).await
}

/// Register a generated invitation code so the join link it backs becomes
/// redeemable. Codes expire server-side after 24 hours.
pub async fn register_invitation(code: &str) -> Result<(), String> {
    post_empty(
        "/users/security/invitation",
        &serde_json::json!({ "code": code }),
    )
    .await
}

pub async fn create_security_user(form: &SecurityForm) -> Result<(), String> {
    post_empty("/security", form).await
}

pub async fn update_security_user(security_id: i64, form: &SecurityForm) -> Result<(), String> {
    put_json(&format!("/security/{security_id}"), form).await
}

pub async fn delete_security_user(security_id: i64) -> Result<(), String> {
    delete(&format!("/security/{security_id}")).await
}
