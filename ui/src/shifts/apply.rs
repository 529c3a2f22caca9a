//! Painting cells.
//!
//! Two colorers exist and never run together: the static one adds category
//! classes styled by the theme, the custom one writes inline colors from the
//! user's [`ColorSettings`]. Which one runs depends on whether a custom
//! record is stored. Both clear everything category-related first, so
//! re-running either is idempotent.

use serde::Deserialize;

use super::classify::{ShiftCategory, ShiftCell};
use super::colors::{ColorSettings, ColorSettingsStore};

/// Foreground forced on deep backgrounds.
pub const CONTRAST_TEXT: &str = "#fff";

/// Visual state of one rendered cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStyle {
    classes: Vec<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
}

impl CellStyle {
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Value for a `style` attribute.
    pub fn style_attr(&self) -> String {
        let mut style = String::new();
        if let Some(bg) = &self.background {
            style.push_str(&format!("background-color: {bg};"));
        }
        if let Some(fg) = &self.foreground {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("color: {fg};"));
        }
        style
    }

    fn clear_category_styling(&mut self) {
        for category in ShiftCategory::ALL {
            self.remove_class(category.css_class());
        }
        self.background = None;
        self.foreground = None;
    }
}

/// A cell plus the styling currently applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ShiftCell")]
pub struct StyledCell {
    pub cell: ShiftCell,
    pub style: CellStyle,
}

impl From<ShiftCell> for StyledCell {
    fn from(cell: ShiftCell) -> Self {
        Self {
            cell,
            style: CellStyle::default(),
        }
    }
}

/// Inline colors from the user's settings.
#[derive(Debug, Clone)]
pub struct CellColorApplier {
    settings: ColorSettings,
}

impl CellColorApplier {
    pub fn new(settings: ColorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ColorSettings {
        &self.settings
    }

    pub fn apply<'a>(&self, cells: impl IntoIterator<Item = &'a mut StyledCell>) {
        for styled in cells {
            styled.style.clear_category_styling();
            let Some(category) = styled.cell.category() else {
                continue;
            };
            styled.style.background = Some(self.settings.color(category).to_string());
            if category.needs_contrast_text() {
                styled.style.foreground = Some(CONTRAST_TEXT.to_string());
            }
        }
    }
}

/// Theme classes, for users who never customised their colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticColorer;

impl StaticColorer {
    /// Returns `false` without touching any cell when custom colors exist.
    pub fn apply<'a>(
        &self,
        cells: impl IntoIterator<Item = &'a mut StyledCell>,
        store: &ColorSettingsStore,
    ) -> bool {
        if store.has_custom() {
            return false;
        }
        for styled in cells {
            styled.style.clear_category_styling();
            if let Some(category) = styled.cell.category() {
                styled.style.add_class(category.css_class());
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Static,
    Custom,
}

/// Paint `cells` with whichever colorer the stored preferences call for.
pub fn restyle_cells<'a>(
    cells: impl IntoIterator<Item = &'a mut StyledCell>,
    store: &ColorSettingsStore,
) -> ColorMode {
    if store.has_custom() {
        CellColorApplier::new(store.load()).apply(cells);
        ColorMode::Custom
    } else {
        StaticColorer.apply(cells, store);
        ColorMode::Static
    }
}
