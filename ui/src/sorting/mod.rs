//! Multi-criteria sorting of the turnus list.

pub mod criteria;
pub mod engine;
pub mod normalize;

pub use criteria::{extract_entries, Criterion, ExtractError, ScheduleEntry};
pub use engine::{score, sort, SortDirection, SortEngine, SortWeights};
pub use normalize::{compute_min_max, normalize, MinMax, MinMaxTable};
