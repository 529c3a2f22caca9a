use dioxus::prelude::*;

use crate::state::{AppState, TimelineState};
use crate::t;

/// Overlay with the timeline image of one turnus. Hidden while closed.
#[component]
pub fn TimelineModal() -> Element {
    let state = use_context::<AppState>();
    let mut timeline = state.timeline;

    let (title, body) = match timeline() {
        TimelineState::Closed => return rsx! {},
        TimelineState::Loading { title } => (title, rsx! { p { class: "timeline-modal__status", {t!("timeline-loading")} } }),
        TimelineState::Ready { title, src } => (title.clone(), rsx! { img { class: "timeline-modal__image", src: "{src}", alt: "{title}" } }),
        TimelineState::Failed { title, message } => (
            title,
            rsx! { p { class: "timeline-modal__status results-card__meta--error", {t!("timeline-error", error = message)} } },
        ),
    };

    rsx! {
        div { class: "timeline-modal", role: "dialog", onclick: move |_| timeline.set(TimelineState::Closed),
            div { class: "timeline-modal__content", onclick: move |evt| evt.stop_propagation(),
                div { class: "timeline-modal__header",
                    h2 { {t!("timeline-title", name = title)} }
                    button {
                        class: "button button--ghost",
                        onclick: move |_| timeline.set(TimelineState::Closed),
                        {t!("timeline-close")}
                    }
                }
                {body}
            }
        }
    }
}
