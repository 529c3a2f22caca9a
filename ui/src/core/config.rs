//! Compile-time configuration.
//!
//! Storage keys keep the names the browser version of the app used, so
//! preferences already sitting in a user's `localStorage` load unchanged.

/// Key holding the customised cell colors.
pub const COLOR_SETTINGS_KEY: &str = "shiftColorSettings";

/// Key holding the sort slider weights.
pub const SORT_WEIGHTS_KEY: &str = "turnuslisteSortingSettings";

/// Prefix for the per-route scroll offset keys (`scrollPosition-/turnusliste`).
pub const SCROLL_POSITION_PREFIX: &str = "scrollPosition-";

/// Base URL for the favorite / selection / timeline endpoints.
///
/// Set `TURNUS_API_BASE` at build time to point a build at another host.
/// Without it the web build talks to the origin that served it.
pub fn api_base() -> String {
    match option_env!("TURNUS_API_BASE") {
        Some(base) if !base.trim().is_empty() => base.trim().to_string(),
        _ => default_api_base(),
    }
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    "http://localhost:5000".to_string()
}
