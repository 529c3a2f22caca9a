use dioxus::prelude::*;

use super::labels::{criterion_label, direction_label};
use crate::core::format::format_weight;
use crate::sorting::engine::{badge_class, WEIGHT_MAX, WEIGHT_MIN, WEIGHT_STEP};
use crate::sorting::{Criterion, SortWeights};
use crate::t;

/// `"Helgetimer: Høy → Lav, Natt: Lav → Høy"`, or `None` when every weight
/// is zero.
pub fn active_summary(weights: &SortWeights) -> Option<String> {
    let parts: Vec<String> = weights
        .summary()
        .into_iter()
        .map(|(criterion, direction)| {
            format!("{}: {}", criterion_label(criterion), direction_label(direction))
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[component]
pub fn SortPanel(
    weights: SortWeights,
    on_change: EventHandler<(Criterion, f64)>,
    on_reset: EventHandler<()>,
) -> Element {
    let summary = active_summary(&weights);

    rsx! {
        div { class: "sort-panel results-card",
            div { class: "results-card__header",
                h2 { {t!("sort-title")} }
                button {
                    class: "button button--ghost",
                    onclick: move |_| on_reset.call(()),
                    {t!("sort-reset")}
                }
            }
            div { class: "sort-panel__sliders",
                { Criterion::ALL.into_iter().map(|criterion| {
                    let key = criterion.key();
                    let weight = weights.get(criterion);
                    rsx! {
                        SortSlider { key: "{key}", criterion, weight, on_change }
                    }
                })}
            }
            if let Some(summary) = summary {
                div { id: "sorting-info", class: "sort-panel__summary",
                    {t!("sort-active", criteria = summary)}
                }
            }
        }
    }
}

#[component]
fn SortSlider(criterion: Criterion, weight: f64, on_change: EventHandler<(Criterion, f64)>) -> Element {
    let id = format!("sort-{}", criterion.key());
    let value = format_weight(weight);

    rsx! {
        div { class: "sort-panel__slider",
            label { r#for: "{id}", {criterion_label(criterion)} }
            input {
                id: "{id}",
                r#type: "range",
                min: "{WEIGHT_MIN}",
                max: "{WEIGHT_MAX}",
                step: "{WEIGHT_STEP}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let weight = evt.value().trim().parse::<f64>().unwrap_or(0.0);
                    on_change.call((criterion, weight));
                },
            }
            span { class: badge_class(weight), "{value}" }
        }
    }
}
