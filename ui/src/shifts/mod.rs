//! Shift table coloring: time-of-day classification, user color preferences
//! and the two mutually exclusive ways of painting cells.

pub mod apply;
pub mod classify;
pub mod colors;

pub use apply::{restyle_cells, CellColorApplier, CellStyle, ColorMode, StaticColorer, StyledCell};
pub use classify::{classify, ShiftCategory, ShiftCell, ShiftTime};
pub use colors::{CategoryColor, ColorSettings, ColorSettingsStore};
