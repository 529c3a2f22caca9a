use dioxus::prelude::*;

use super::labels::stat_labels;
use super::shift_table::ShiftTable;
use crate::data::TurnusCard;
use crate::interactions::{Interaction, InteractionBus, SelectShift, ShowTimeline, ToggleFavorite};
use crate::t;

/// One turnus in the list: header (pick, favorite, timeline), shift table
/// and stat grid.
#[component]
pub fn TurnusCardView(card: TurnusCard, turnus_set_id: i64) -> Element {
    let bus = use_context::<InteractionBus>();
    let title = card.display_name().to_string();
    let number = card.number.clone().unwrap_or_default();
    let favorite = card.favorite;
    let revision = card.revision;

    let select = {
        let bus = bus.clone();
        let title = title.clone();
        move |_: MouseEvent| {
            bus.dispatch(Interaction::Select(SelectShift {
                shift_title: title.clone(),
            }));
        }
    };
    let toggle = {
        let bus = bus.clone();
        let title = title.clone();
        move |evt: FormEvent| {
            bus.dispatch(Interaction::Toggle(ToggleFavorite {
                shift_title: title.clone(),
                favorite: evt.checked(),
            }));
        }
    };
    let timeline = {
        let title = title.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            bus.dispatch(Interaction::Timeline(ShowTimeline {
                turnus_set_id,
                shift_title: title.clone(),
            }));
        }
    };

    rsx! {
        li { class: "list-group-item turnus-card",
            div { class: "turnus-card__header clickable-row", onclick: select,
                span { class: "turnus-card__number", "{number}" }
                span { class: "turnus-card__name", "{title}" }
                label {
                    class: "turnus-card__favorite",
                    onclick: move |evt| evt.stop_propagation(),
                    // A new key after a rejected toggle rebuilds the box from `favorite`.
                    for rev in std::iter::once(revision) {
                        input {
                            key: "{rev}",
                            class: "toggle-favoritt",
                            r#type: "checkbox",
                            checked: favorite,
                            onchange: toggle.clone(),
                        }
                    }
                    {t!("card-favorite")}
                }
                button { class: "button button--ghost", onclick: timeline, {t!("card-timeline")} }
            }
            ShiftTable { weeks: card.weeks.clone() }
            if let Some(stats) = card.stats.clone() {
                StatGrid { stats }
            }
        }
    }
}

#[component]
fn StatGrid(stats: Vec<Vec<String>>) -> Element {
    let labels = stat_labels();

    rsx! {
        table { class: "stat-grid",
            tbody {
                for (row, captions) in labels.iter().enumerate() {
                    tr { key: "{row}",
                        for (col, caption) in captions.iter().enumerate() {
                            th { "{caption}" }
                            td {
                                {stats.get(row).and_then(|r| r.get(col)).cloned().unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}
