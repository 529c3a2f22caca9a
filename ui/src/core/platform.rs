//! Platform detection and the few blocking dialogs the app relies on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Show a blocking alert. Desktop has no native dialog wired, so the message
/// goes to the log and callers keep their inline error banner.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    tracing::error!(message, "alert");
}

/// Ask the user to confirm a destructive action. Desktop always confirms.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    tracing::debug!(message, "confirm (auto-accepted)");
    true
}

/// Leave the app for `url` (server-side redirect target).
pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_ok() {
                return;
            }
        }
    }
    tracing::info!(url, "redirect requested");
}

/// Current vertical scroll offset of the page, when there is a page.
pub fn scroll_y() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn scroll_to(y: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = y;
    }
}
