//! Sort criteria and the numbers behind them.
//!
//! Each card's stat grid has a fixed layout:
//!
//! | row | col 0      | col 1          | col 2          | col 3         |
//! |-----|------------|----------------|----------------|---------------|
//! | 0   | Dagsverk   | Tidlig         | Ettermiddag    | Natt          |
//! | 1   | Helgetimer | Helgetimer dag | Starter før 6  | Slutt før 20  |
//!
//! Cells are read like `parseInt(text) || 0`: the leading integer, or zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::TurnusCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Criterion {
    Helgetimer,
    ShiftCount,
    Early,
    Night,
    Afternoon,
    BeforeSix,
    EndsBeforeEight,
}

impl Criterion {
    /// Slider order, also the order of the active-criteria summary.
    pub const ALL: [Criterion; 7] = [
        Criterion::Helgetimer,
        Criterion::ShiftCount,
        Criterion::Early,
        Criterion::Night,
        Criterion::Afternoon,
        Criterion::BeforeSix,
        Criterion::EndsBeforeEight,
    ];

    /// Key in the persisted weights record.
    pub fn key(self) -> &'static str {
        match self {
            Self::Helgetimer => "helgetimer",
            Self::ShiftCount => "shift_cnt",
            Self::Early => "tidlig",
            Self::Night => "natt",
            Self::Afternoon => "ettermiddag",
            Self::BeforeSix => "before_6",
            Self::EndsBeforeEight => "afternoon_ends",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Position in the stat grid.
    fn grid_position(self) -> (usize, usize) {
        match self {
            Self::ShiftCount => (0, 0),
            Self::Early => (0, 1),
            Self::Afternoon => (0, 2),
            Self::Night => (0, 3),
            Self::Helgetimer => (1, 0),
            Self::BeforeSix => (1, 2),
            Self::EndsBeforeEight => (1, 3),
        }
    }

    pub fn value(self, entry: &ScheduleEntry) -> f64 {
        let raw = match self {
            Self::Helgetimer => entry.weekend_hours,
            Self::ShiftCount => entry.shift_count,
            Self::Early => entry.early_count,
            Self::Night => entry.night_count,
            Self::Afternoon => entry.afternoon_count,
            Self::BeforeSix => entry.before_six_count,
            Self::EndsBeforeEight => entry.ends_before_eight_count,
        };
        f64::from(raw)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("turnus #{position} has no name")]
    MissingName { position: usize },
    #[error("turnus {name} has no stat grid")]
    MissingStats { name: String },
    #[error("turnus {name} is missing stat cell row {row}, column {col}")]
    MissingStat { name: String, row: usize, col: usize },
}

/// Numbers read off one card. `position` is the card's index in the list as
/// first rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub name: String,
    pub position: usize,
    pub shift_count: u32,
    pub early_count: u32,
    pub afternoon_count: u32,
    pub night_count: u32,
    pub weekend_hours: u32,
    pub before_six_count: u32,
    pub ends_before_eight_count: u32,
    pub score: f64,
}

impl ScheduleEntry {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            shift_count: 0,
            early_count: 0,
            afternoon_count: 0,
            night_count: 0,
            weekend_hours: 0,
            before_six_count: 0,
            ends_before_eight_count: 0,
            score: 0.0,
        }
    }

    pub fn from_card(position: usize, card: &TurnusCard) -> Result<Self, ExtractError> {
        let name = card
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ExtractError::MissingName { position })?
            .to_string();

        if card.stats.is_none() {
            return Err(ExtractError::MissingStats { name });
        }

        let read = |criterion: Criterion| {
            let (row, col) = criterion.grid_position();
            card.stat(row, col)
                .map(parse_leading_int)
                .ok_or_else(|| ExtractError::MissingStat {
                    name: name.clone(),
                    row,
                    col,
                })
        };

        Ok(Self {
            shift_count: read(Criterion::ShiftCount)?,
            early_count: read(Criterion::Early)?,
            afternoon_count: read(Criterion::Afternoon)?,
            night_count: read(Criterion::Night)?,
            weekend_hours: read(Criterion::Helgetimer)?,
            before_six_count: read(Criterion::BeforeSix)?,
            ends_before_eight_count: read(Criterion::EndsBeforeEight)?,
            ..Self::new(name.clone(), position)
        })
    }
}

/// Read every card that can be read. Cards that can't are logged and left
/// out; the rest keep their list position.
pub fn extract_entries(cards: &[TurnusCard]) -> Vec<ScheduleEntry> {
    let entries: Vec<ScheduleEntry> = cards
        .iter()
        .enumerate()
        .filter_map(|(position, card)| match ScheduleEntry::from_card(position, card) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(%err, "skipping turnus in sort");
                None
            }
        })
        .collect();
    tracing::debug!(found = cards.len(), collected = entries.len(), "turnus data collected");
    entries
}

/// Leading integer of `text` after leading whitespace, `0` when there is
/// none. Counts can't be negative, so a leading minus also yields `0`.
pub fn parse_leading_int(text: &str) -> u32 {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: Option<&str>, stats: Option<Vec<Vec<&str>>>) -> TurnusCard {
        TurnusCard {
            name: name.map(String::from),
            number: None,
            favorite: false,
            weeks: Vec::new(),
            stats: stats.map(|rows| {
                rows.into_iter()
                    .map(|row| row.into_iter().map(String::from).collect())
                    .collect()
            }),
            revision: 0,
        }
    }

    #[test]
    fn reads_the_grid_positionally() {
        let card = card(
            Some(" 103HLD "),
            Some(vec![vec!["21", "9", "7", "5"], vec!["36", "18", "4", "3"]]),
        );
        let entry = ScheduleEntry::from_card(2, &card).unwrap();
        assert_eq!(entry.name, "103HLD");
        assert_eq!(entry.position, 2);
        assert_eq!(entry.shift_count, 21);
        assert_eq!(entry.early_count, 9);
        assert_eq!(entry.afternoon_count, 7);
        assert_eq!(entry.night_count, 5);
        assert_eq!(entry.weekend_hours, 36);
        assert_eq!(entry.before_six_count, 4);
        assert_eq!(entry.ends_before_eight_count, 3);
    }

    #[test]
    fn unreadable_numbers_become_zero() {
        let card = card(
            Some("1"),
            Some(vec![vec!["", "n/a", "7 stk", "-2"], vec!["12.5", "", " 4", "x3"]]),
        );
        let entry = ScheduleEntry::from_card(0, &card).unwrap();
        assert_eq!(entry.shift_count, 0);
        assert_eq!(entry.early_count, 0);
        assert_eq!(entry.afternoon_count, 7);
        assert_eq!(entry.night_count, 0);
        assert_eq!(entry.weekend_hours, 12);
        assert_eq!(entry.before_six_count, 4);
        assert_eq!(entry.ends_before_eight_count, 0);
    }

    #[test]
    fn missing_parts_are_reported() {
        assert_eq!(
            ScheduleEntry::from_card(4, &card(None, Some(vec![]))),
            Err(ExtractError::MissingName { position: 4 })
        );
        assert_eq!(
            ScheduleEntry::from_card(0, &card(Some("7"), None)),
            Err(ExtractError::MissingStats { name: "7".into() })
        );
        assert_eq!(
            ScheduleEntry::from_card(0, &card(Some("7"), Some(vec![vec!["1", "2", "3", "4"]]))),
            Err(ExtractError::MissingStat { name: "7".into(), row: 1, col: 0 })
        );
    }

    #[test]
    fn extraction_skips_broken_cards_and_keeps_positions() {
        let cards = vec![
            card(Some("a"), Some(vec![vec!["1", "1", "1", "1"], vec!["1", "1", "1", "1"]])),
            card(Some("b"), None),
            card(Some("c"), Some(vec![vec!["2", "2", "2", "2"], vec!["2", "2", "2", "2"]])),
        ];
        let entries = extract_entries(&cards);
        let positions: Vec<usize> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn keys_round_trip() {
        for criterion in Criterion::ALL {
            assert_eq!(Criterion::from_key(criterion.key()), Some(criterion));
        }
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  42h"), 42);
        assert_eq!(parse_leading_int("+3"), 3);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int("99999999999"), u32::MAX);
    }
}
