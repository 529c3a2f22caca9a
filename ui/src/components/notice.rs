use dioxus::prelude::*;

use crate::state::AppState;
use crate::t;

/// Inline copy of the last request failure, for platforms without a
/// blocking alert.
#[component]
pub fn NoticeBanner() -> Element {
    let state = use_context::<AppState>();
    let mut notice = state.notice;

    match notice() {
        Some(message) => rsx! {
            div { class: "notice-banner", role: "alert",
                span { "{message}" }
                button {
                    class: "button button--ghost",
                    onclick: move |_| notice.set(None),
                    {t!("notice-dismiss")}
                }
            }
        },
        None => rsx! {},
    }
}
