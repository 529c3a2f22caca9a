//! The turnus list as the pages render it.
//!
//! A [`TurnusSet`] is a named collection of turnus cards. Each card holds
//! its shift table (weeks of [`StyledCell`]s) and the stat grid printed
//! under it. The grid is kept as raw text in its fixed row/column layout;
//! sort criteria are read out of it positionally, see
//! [`crate::sorting::criteria`].

use serde::Deserialize;

use crate::shifts::StyledCell;

const EMBEDDED_SET: &str = include_str!("../assets/data/turnusliste.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TurnusSet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub turnuser: Vec<TurnusCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TurnusCard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub weeks: Vec<Vec<StyledCell>>,
    /// Stat grid rows, each a list of cell texts.
    #[serde(default)]
    pub stats: Option<Vec<Vec<String>>>,
    /// Bumped when a favorite change is rejected so the checkbox is rebuilt
    /// from `favorite` instead of keeping the user's click.
    #[serde(skip)]
    pub revision: u32,
}

impl TurnusCard {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or("?")
    }

    pub fn stat(&self, row: usize, col: usize) -> Option<&str> {
        self.stats.as_ref()?.get(row)?.get(col).map(String::as_str)
    }
}

impl TurnusSet {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The set bundled with the app.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_SET)
    }

    pub fn card_by_name(&self, name: &str) -> Option<&TurnusCard> {
        self.turnuser.iter().find(|c| c.name.as_deref().map(str::trim) == Some(name))
    }
}

/// Record a confirmed favorite change on every card with this name.
pub fn set_favorite(cards: &mut [TurnusCard], name: &str, favorite: bool) {
    for card in cards.iter_mut().filter(|c| c.display_name() == name) {
        card.favorite = favorite;
    }
}

/// A favorite change was rejected: keep `favorite` as it was and force the
/// checkbox back to it.
pub fn reject_favorite(cards: &mut [TurnusCard], name: &str) {
    for card in cards.iter_mut().filter(|c| c.display_name() == name) {
        card.revision = card.revision.wrapping_add(1);
    }
}

/// Every cell of every card, in table order.
pub fn cells_mut(cards: &mut [TurnusCard]) -> impl Iterator<Item = &mut StyledCell> {
    cards
        .iter_mut()
        .flat_map(|card| card.weeks.iter_mut())
        .flat_map(|week| week.iter_mut())
}
