use std::collections::BTreeMap;

use dioxus::prelude::*;

use super::labels::category_label;
use crate::shifts::{ColorMode, ColorSettings, ShiftCategory};
use crate::t;

/// Outcome of the last apply/reset, shown under the buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorPanelStatus {
    Idle,
    Applied,
    Reset,
    Error(String),
}

/// Raw input values for every category, seeded from `settings`.
pub fn inputs_from(settings: &ColorSettings) -> BTreeMap<ShiftCategory, String> {
    ShiftCategory::ALL
        .into_iter()
        .map(|category| (category, settings.color(category).to_string()))
        .collect()
}

#[component]
pub fn ColorPanel(
    inputs: BTreeMap<ShiftCategory, String>,
    settings: ColorSettings,
    mode: ColorMode,
    status: ColorPanelStatus,
    on_input: EventHandler<(ShiftCategory, String)>,
    on_apply: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let mode_text = match mode {
        ColorMode::Custom => t!("colors-mode-custom"),
        ColorMode::Static => t!("colors-mode-static"),
    };
    let feedback = match &status {
        ColorPanelStatus::Idle => None,
        ColorPanelStatus::Applied => Some(("results-card__meta--success", t!("colors-applied"))),
        ColorPanelStatus::Reset => Some(("results-card__meta--success", t!("colors-reset-done"))),
        ColorPanelStatus::Error(err) => Some((
            "results-card__meta--error",
            t!("colors-save-error", error = err.clone()),
        )),
    };

    rsx! {
        div { class: "color-panel results-card",
            div { class: "results-card__header",
                h2 { {t!("colors-title")} }
                span { class: "results-card__meta", "{mode_text}" }
            }
            div { class: "color-panel__grid",
                { ShiftCategory::ALL.into_iter().map(|category| {
                    let key = category.settings_key();
                    rsx! {
                        ColorRow {
                            key: "{key}",
                            category,
                            value: inputs.get(&category).cloned().unwrap_or_default(),
                            hint: settings.get(category).label.clone().unwrap_or_default(),
                            on_input,
                        }
                    }
                })}
            }
            div { class: "color-panel__actions",
                button {
                    class: "button button--primary",
                    onclick: move |_| on_apply.call(()),
                    {t!("colors-apply")}
                }
                button {
                    class: "button button--ghost",
                    onclick: move |_| on_reset.call(()),
                    {t!("colors-reset")}
                }
            }
            if let Some((class, text)) = feedback {
                p { class: "results-card__meta {class}", "{text}" }
            }
        }
    }
}

#[component]
fn ColorRow(
    category: ShiftCategory,
    value: String,
    hint: String,
    on_input: EventHandler<(ShiftCategory, String)>,
) -> Element {
    let id = format!("color-{}", category.settings_key());
    let swatch = category.css_class();

    rsx! {
        div { class: "color-panel__row",
            label { r#for: "{id}",
                span { class: "color-panel__swatch {swatch}" }
                {category_label(category)}
            }
            if !hint.is_empty() {
                span { class: "color-panel__hint", "{hint}" }
            }
            input {
                id: "{id}",
                r#type: "color",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call((category, evt.value())),
            }
        }
    }
}
