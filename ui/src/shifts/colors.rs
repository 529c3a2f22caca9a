//! User color preferences for the shift table.
//!
//! The record lives under a single storage key as a JSON object keyed by
//! category (`nightEarly`, `morning`, ..., `hdag`). Loading merges the stored
//! entries over the built-in defaults, so categories added later pick up
//! their default color. Records written by the older five-bucket scheme
//! (`early`, `late`, `night`, ...) are discarded wholesale.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::config::COLOR_SETTINGS_KEY;
use crate::core::storage::{self, KeyValueStore, StorageError};

use super::classify::ShiftCategory;

/// Keys of the retired category scheme. Any of them marks a stale record.
pub const LEGACY_KEYS: [&str; 5] = ["early", "earlylate", "earlybefore6", "late", "night"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CategoryColor {
    fn new(color: &str, label: &str) -> Self {
        Self {
            color: color.to_string(),
            label: Some(label.to_string()),
        }
    }
}

/// One color entry per category. The struct shape keeps every category
/// present at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSettings {
    pub night_early: CategoryColor,
    pub morning: CategoryColor,
    pub midday: CategoryColor,
    pub afternoon: CategoryColor,
    pub evening: CategoryColor,
    pub dayoff: CategoryColor,
    pub hdag: CategoryColor,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            night_early: CategoryColor::new("#1B3A6B", "Før 06:00"),
            morning: CategoryColor::new("#4A90D9", "06:00–07:59"),
            midday: CategoryColor::new("#87CEEB", "08:00–11:59"),
            afternoon: CategoryColor::new("#FF9999", "12:00–16:59"),
            evening: CategoryColor::new("#9B59B6", "17:00+"),
            dayoff: CategoryColor::new("#4ADE80", "Fridag"),
            hdag: CategoryColor::new("#FCD34D", "Helligdag"),
        }
    }
}

impl ColorSettings {
    pub fn get(&self, category: ShiftCategory) -> &CategoryColor {
        match category {
            ShiftCategory::NightEarly => &self.night_early,
            ShiftCategory::Morning => &self.morning,
            ShiftCategory::Midday => &self.midday,
            ShiftCategory::Afternoon => &self.afternoon,
            ShiftCategory::Evening => &self.evening,
            ShiftCategory::DayOff => &self.dayoff,
            ShiftCategory::Holiday => &self.hdag,
        }
    }

    pub fn get_mut(&mut self, category: ShiftCategory) -> &mut CategoryColor {
        match category {
            ShiftCategory::NightEarly => &mut self.night_early,
            ShiftCategory::Morning => &mut self.morning,
            ShiftCategory::Midday => &mut self.midday,
            ShiftCategory::Afternoon => &mut self.afternoon,
            ShiftCategory::Evening => &mut self.evening,
            ShiftCategory::DayOff => &mut self.dayoff,
            ShiftCategory::Holiday => &mut self.hdag,
        }
    }

    pub fn color(&self, category: ShiftCategory) -> &str {
        &self.get(category).color
    }

    /// Shallow merge: each stored category entry replaces the default entry
    /// as a whole. Malformed entries and unknown keys are ignored.
    pub fn merged_over_defaults(stored: &Map<String, Value>) -> Self {
        let mut settings = Self::default();
        for category in ShiftCategory::ALL {
            let Some(raw) = stored.get(category.settings_key()) else {
                continue;
            };
            match serde_json::from_value::<CategoryColor>(raw.clone()) {
                Ok(entry) => *settings.get_mut(category) = entry,
                Err(err) => tracing::warn!(
                    key = category.settings_key(),
                    %err,
                    "ignoring malformed color entry"
                ),
            }
        }
        settings
    }

    /// Build settings from the raw color inputs of the settings panel.
    /// Missing, empty or invalid inputs fall back to the category default;
    /// labels always come from the defaults.
    pub fn from_inputs(inputs: &BTreeMap<ShiftCategory, String>) -> Self {
        let mut settings = Self::default();
        for category in ShiftCategory::ALL {
            if let Some(color) = inputs.get(&category).map(|c| c.trim()) {
                if is_hex_color(color) {
                    settings.get_mut(category).color = color.to_string();
                }
            }
        }
        settings
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

fn has_legacy_keys(stored: &Map<String, Value>) -> bool {
    LEGACY_KEYS
        .iter()
        .any(|key| stored.contains_key(*key))
}

/// Load/save/reset of [`ColorSettings`] over a [`KeyValueStore`].
#[derive(Clone)]
pub struct ColorSettingsStore {
    store: Rc<dyn KeyValueStore>,
}

impl ColorSettingsStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether the user has saved custom colors.
    pub fn has_custom(&self) -> bool {
        match self.store.get(COLOR_SETTINGS_KEY) {
            Ok(raw) => raw.is_some(),
            Err(err) => {
                tracing::warn!(%err, "couldn't read color settings");
                false
            }
        }
    }

    /// Stored settings merged over the defaults. Never fails: unreadable or
    /// stale records degrade to the defaults.
    pub fn load(&self) -> ColorSettings {
        let stored = match storage::load_json::<Value>(self.store.as_ref(), COLOR_SETTINGS_KEY) {
            Ok(Some(Value::Object(map))) => map,
            Ok(Some(other)) => {
                tracing::warn!(kind = json_kind(&other), "color settings record is not an object");
                return ColorSettings::default();
            }
            Ok(None) => return ColorSettings::default(),
            Err(err) => {
                tracing::warn!(%err, "error loading color settings");
                return ColorSettings::default();
            }
        };

        if has_legacy_keys(&stored) {
            tracing::info!("discarding color settings from the retired category scheme");
            if let Err(err) = self.store.remove(COLOR_SETTINGS_KEY) {
                tracing::warn!(%err, "couldn't remove stale color settings");
            }
            return ColorSettings::default();
        }

        ColorSettings::merged_over_defaults(&stored)
    }

    /// Overwrite the stored record with the full settings object.
    pub fn save(&self, settings: &ColorSettings) -> Result<(), StorageError> {
        storage::save_json(self.store.as_ref(), COLOR_SETTINGS_KEY, settings)
            .inspect(|_| tracing::debug!("color settings saved"))
            .inspect_err(|err| tracing::error!(%err, "error saving color settings"))
    }

    /// Forget the custom colors; the next `load` yields the defaults.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.store
            .remove(COLOR_SETTINGS_KEY)
            .inspect_err(|err| tracing::error!(%err, "error resetting color settings"))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use serde_json::json;

    fn store() -> (Rc<MemoryStore>, ColorSettingsStore) {
        let backing = Rc::new(MemoryStore::default());
        let settings = ColorSettingsStore::new(backing.clone());
        (backing, settings)
    }

    #[test]
    fn missing_record_loads_defaults() {
        let (_, settings) = store();
        assert!(!settings.has_custom());
        assert_eq!(settings.load(), ColorSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let (_, settings) = store();
        let mut custom = ColorSettings::default();
        custom.evening.color = "#000000".into();
        custom.dayoff.label = None;
        settings.save(&custom).unwrap();
        assert!(settings.has_custom());
        assert_eq!(settings.load(), custom);
    }

    #[test]
    fn partial_records_are_merged_over_defaults() {
        let (backing, settings) = store();
        backing
            .set(
                COLOR_SETTINGS_KEY,
                &json!({ "morning": { "color": "#123456" }, "unknown": 1 }).to_string(),
            )
            .unwrap();

        let loaded = settings.load();
        assert_eq!(loaded.morning, CategoryColor { color: "#123456".into(), label: None });
        assert_eq!(loaded.midday, ColorSettings::default().midday);
    }

    #[test]
    fn malformed_entries_keep_their_default() {
        let (backing, settings) = store();
        backing
            .set(COLOR_SETTINGS_KEY, &json!({ "hdag": "yellow" }).to_string())
            .unwrap();
        assert_eq!(settings.load().hdag, ColorSettings::default().hdag);
    }

    #[test]
    fn legacy_records_are_discarded() {
        let (backing, settings) = store();
        backing
            .set(
                COLOR_SETTINGS_KEY,
                &json!({
                    "early": { "color": "#ff0000" },
                    "morning": { "color": "#123456" }
                })
                .to_string(),
            )
            .unwrap();

        assert_eq!(settings.load(), ColorSettings::default());
        assert!(backing.get(COLOR_SETTINGS_KEY).unwrap().is_none());
    }

    #[test]
    fn legacy_keys_count_even_when_null() {
        let (backing, settings) = store();
        backing
            .set(
                COLOR_SETTINGS_KEY,
                &json!({ "early": null, "morning": { "color": "#123456" } }).to_string(),
            )
            .unwrap();

        assert_eq!(settings.load(), ColorSettings::default());
        assert!(backing.get(COLOR_SETTINGS_KEY).unwrap().is_none());
    }

    #[test]
    fn corrupt_json_loads_defaults_without_clearing() {
        let (backing, settings) = store();
        backing.set(COLOR_SETTINGS_KEY, "{oops").unwrap();
        assert_eq!(settings.load(), ColorSettings::default());
        assert!(backing.get(COLOR_SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn reset_deletes_the_record() {
        let (_, settings) = store();
        settings.save(&ColorSettings::default()).unwrap();
        settings.reset().unwrap();
        assert!(!settings.has_custom());
    }

    #[test]
    fn save_failure_is_reported_and_memory_state_survives() {
        let backing = Rc::new(MemoryStore::with_quota(16));
        let settings = ColorSettingsStore::new(backing);
        let custom = ColorSettings::default();
        assert!(settings.save(&custom).is_err());
        assert_eq!(custom, ColorSettings::default());
        assert!(!settings.has_custom());
    }

    #[test]
    fn inputs_fall_back_per_category() {
        let inputs = BTreeMap::from([
            (ShiftCategory::Morning, "#abcdef".to_string()),
            (ShiftCategory::Evening, "".to_string()),
            (ShiftCategory::DayOff, "green".to_string()),
        ]);
        let settings = ColorSettings::from_inputs(&inputs);
        assert_eq!(settings.morning.color, "#abcdef");
        assert_eq!(settings.morning.label.as_deref(), Some("06:00–07:59"));
        assert_eq!(settings.evening, ColorSettings::default().evening);
        assert_eq!(settings.dayoff, ColorSettings::default().dayoff);
    }

    #[test]
    fn serialized_keys_match_the_category_keys() {
        let value = serde_json::to_value(ColorSettings::default()).unwrap();
        let object = value.as_object().unwrap();
        for category in ShiftCategory::ALL {
            assert!(object.contains_key(category.settings_key()));
        }
        assert_eq!(object.len(), ShiftCategory::ALL.len());
    }
}
