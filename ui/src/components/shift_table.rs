use dioxus::prelude::*;

use crate::shifts::StyledCell;
use crate::t;

fn weekday_labels() -> [String; 7] {
    [
        t!("weekday-mon"),
        t!("weekday-tue"),
        t!("weekday-wed"),
        t!("weekday-thu"),
        t!("weekday-fri"),
        t!("weekday-sat"),
        t!("weekday-sun"),
    ]
}

/// One turnus rendered week by week. Each cell carries the classes and
/// inline colors its colorer assigned.
#[component]
pub fn ShiftTable(weeks: Vec<Vec<StyledCell>>) -> Element {
    let days = weekday_labels();
    let week_label = t!("card-week");

    rsx! {
        table { class: "shift-table",
            thead {
                tr {
                    th { class: "shift-table__week", "{week_label}" }
                    for day in days {
                        th { "{day}" }
                    }
                }
            }
            tbody {
                for (index, week) in weeks.iter().enumerate() {
                    tr { key: "{index}",
                        td { class: "shift-table__week", {(index + 1).to_string()} }
                        for cell in week.iter() {
                            ShiftCellView { cell: cell.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ShiftCellView(cell: StyledCell) -> Element {
    let class = cell.style.class_attr();
    let style = cell.style.style_attr();
    let time = cell.cell.display_time();
    let custom = cell.cell.custom_text.clone().filter(|c| !c.trim().is_empty());

    rsx! {
        td { class: "shift-cell {class}", style: "{style}",
            span { class: "time-text", "{time}" }
            if let Some(custom) = custom {
                span { class: "custom-text", "{custom}" }
            }
        }
    }
}
