use dioxus::prelude::*;

use crate::components::{inputs_from, ColorPanel, ColorPanelStatus, ShiftTable};
use crate::core::{platform, timing};
use crate::shifts::{ColorSettings, ShiftCategory};
use crate::state::AppState;
use crate::t;

/// How long the "applied" confirmation stays up.
const FEEDBACK_MS: u64 = 2_000;

#[component]
pub fn Colors() -> Element {
    let state = use_context::<AppState>();
    let settings = use_signal({
        let store = state.color_store();
        move || store.load()
    });
    let mut inputs = use_signal(|| inputs_from(&settings.peek()));
    let status = use_signal(|| ColorPanelStatus::Idle);

    let on_input = move |(category, value): (ShiftCategory, String)| {
        inputs.write().insert(category, value);
    };

    let on_apply = {
        let state = state.clone();
        let mut settings = settings;
        let mut status = status;
        move |_: ()| {
            let next = ColorSettings::from_inputs(&inputs.read());
            match state.color_store().save(&next) {
                Ok(()) => {
                    tracing::info!("custom colors applied");
                    settings.set(next);
                    state.restyle();
                    status.set(ColorPanelStatus::Applied);
                    spawn(async move {
                        timing::sleep_ms(FEEDBACK_MS).await;
                        if status() == ColorPanelStatus::Applied {
                            status.set(ColorPanelStatus::Idle);
                        }
                    });
                }
                Err(err) => status.set(ColorPanelStatus::Error(err.to_string())),
            }
        }
    };

    let on_reset = {
        let state = state.clone();
        let mut settings = settings;
        let mut status = status;
        move |_: ()| {
            if !platform::confirm(&t!("colors-reset-confirm")) {
                return;
            }
            match state.color_store().reset() {
                Ok(()) => {
                    let defaults = ColorSettings::default();
                    inputs.set(inputs_from(&defaults));
                    settings.set(defaults);
                    state.restyle();
                    status.set(ColorPanelStatus::Reset);
                }
                Err(err) => status.set(ColorPanelStatus::Error(err.to_string())),
            }
        }
    };

    let preview = state.cards.read().first().map(|card| card.weeks.clone());

    rsx! {
        section { class: "page page-colors",
            h1 { {t!("colors-title")} }
            ColorPanel {
                inputs: inputs(),
                settings: settings(),
                mode: *state.color_mode.read(),
                status: status(),
                on_input,
                on_apply,
                on_reset,
            }
            if let Some(weeks) = preview {
                div { class: "results-card",
                    h2 { {t!("colors-preview")} }
                    ShiftTable { weeks }
                }
            }
        }
    }
}
