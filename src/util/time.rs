//! Wall-clock access for cache busters and chart windows.

/// Current time in milliseconds since the Unix epoch. Zero on the server,
/// where nothing time-dependent is rendered.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
