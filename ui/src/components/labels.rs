//! Localized display names for domain enums.

use crate::shifts::ShiftCategory;
use crate::sorting::{Criterion, SortDirection};
use crate::t;

pub fn criterion_label(criterion: Criterion) -> String {
    match criterion {
        Criterion::Helgetimer => t!("criterion-helgetimer"),
        Criterion::ShiftCount => t!("criterion-shift-cnt"),
        Criterion::Early => t!("criterion-tidlig"),
        Criterion::Night => t!("criterion-natt"),
        Criterion::Afternoon => t!("criterion-ettermiddag"),
        Criterion::BeforeSix => t!("criterion-before-6"),
        Criterion::EndsBeforeEight => t!("criterion-afternoon-ends"),
    }
}

pub fn direction_label(direction: SortDirection) -> String {
    match direction {
        SortDirection::HighToLow => t!("sort-high-to-low"),
        SortDirection::LowToHigh => t!("sort-low-to-high"),
    }
}

pub fn category_label(category: ShiftCategory) -> String {
    match category {
        ShiftCategory::NightEarly => t!("category-night-early"),
        ShiftCategory::Morning => t!("category-morning"),
        ShiftCategory::Midday => t!("category-midday"),
        ShiftCategory::Afternoon => t!("category-afternoon"),
        ShiftCategory::Evening => t!("category-evening"),
        ShiftCategory::DayOff => t!("category-dayoff"),
        ShiftCategory::Holiday => t!("category-hdag"),
    }
}

/// Stat grid captions, row by row.
pub fn stat_labels() -> [[String; 4]; 2] {
    [
        [
            t!("stat-shift-cnt"),
            t!("stat-tidlig"),
            t!("stat-ettermiddag"),
            t!("stat-natt"),
        ],
        [
            t!("stat-helgetimer"),
            t!("stat-helgetimer-dag"),
            t!("stat-before-6"),
            t!("stat-afternoon-ends"),
        ],
    ]
}
