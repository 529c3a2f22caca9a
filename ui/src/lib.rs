//! Shared UI crate for the turnus viewer: shift classification and
//! coloring, weighted sorting, persistence and every page component. The
//! `web` and `desktop` crates only add routing and launch.

pub mod core;
pub mod data;
pub mod i18n;
pub mod interactions;
pub mod shifts;
pub mod sorting;
pub mod state;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod labels;

    mod color_panel;
    pub use color_panel::{inputs_from, ColorPanel, ColorPanelStatus};

    mod notice;
    pub use notice::NoticeBanner;

    mod shift_table;
    pub use shift_table::ShiftTable;

    mod sort_panel;
    pub use sort_panel::{active_summary, SortPanel};

    mod timeline_modal;
    pub use timeline_modal::TimelineModal;

    mod turnus_card;
    pub use turnus_card::TurnusCardView;
}

/// Shared theme, for launchers that inline their CSS.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
