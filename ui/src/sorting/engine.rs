//! Weighted, normalized scoring and the sort state behind the sliders.
//!
//! Every active criterion contributes `normalized * |weight|` when its
//! weight is positive (favor high raw values) and `(1 - normalized) *
//! |weight|` when negative (favor low raw values). Zero-weight criteria are
//! left out entirely. Sorting is descending by score and stable, and always
//! starts from the order captured when the engine was built, so the result
//! depends on the weights alone.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::core::config::SORT_WEIGHTS_KEY;
use crate::core::storage::{self, KeyValueStore, StorageError};

use super::criteria::{Criterion, ScheduleEntry};
use super::normalize::{compute_min_max, normalize, MinMaxTable};

pub const WEIGHT_MIN: f64 = -1.0;
pub const WEIGHT_MAX: f64 = 1.0;
pub const WEIGHT_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Positive weight: high raw values first.
    HighToLow,
    /// Negative weight: low raw values first.
    LowToHigh,
}

impl SortDirection {
    pub fn of(weight: f64) -> Option<Self> {
        if weight > 0.0 {
            Some(Self::HighToLow)
        } else if weight < 0.0 {
            Some(Self::LowToHigh)
        } else {
            None
        }
    }
}

/// Slider weights. Absent criteria weigh zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortWeights {
    values: BTreeMap<Criterion, f64>,
}

impl SortWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.values.get(&criterion).copied().unwrap_or(0.0)
    }

    /// Clamp into the slider range; non-finite input counts as zero.
    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        let weight = if weight.is_finite() {
            weight.clamp(WEIGHT_MIN, WEIGHT_MAX)
        } else {
            0.0
        };
        if weight == 0.0 {
            self.values.remove(&criterion);
        } else {
            self.values.insert(criterion, weight);
        }
    }

    pub fn with(mut self, criterion: Criterion, weight: f64) -> Self {
        self.set(criterion, weight);
        self
    }

    pub fn is_neutral(&self) -> bool {
        self.values.is_empty()
    }

    /// Non-zero weights in slider order.
    pub fn active(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.values.iter().map(|(c, w)| (*c, *w))
    }

    /// Active criteria and their direction, for the summary line.
    pub fn summary(&self) -> Vec<(Criterion, SortDirection)> {
        self.active()
            .filter_map(|(c, w)| SortDirection::of(w).map(|d| (c, d)))
            .collect()
    }

    /// Flat record with every criterion key.
    pub fn to_record(&self) -> Map<String, Value> {
        Criterion::ALL
            .into_iter()
            .map(|c| (c.key().to_string(), Value::from(self.get(c))))
            .collect()
    }

    /// Accepts numbers and numeric strings; anything else is ignored.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut weights = Self::default();
        for (key, raw) in record {
            let Some(criterion) = Criterion::from_key(key) else {
                continue;
            };
            let value = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match value {
                Some(value) => weights.set(criterion, value),
                None => tracing::warn!(key = key.as_str(), "ignoring unreadable sort weight"),
            }
        }
        weights
    }
}

/// Badge class for a slider value display.
pub fn badge_class(weight: f64) -> &'static str {
    if weight > 0.0 {
        "badge bg-success"
    } else {
        "badge bg-secondary"
    }
}

/// Weighted score of one entry against the dataset ranges in `min_max`.
pub fn score(entry: &ScheduleEntry, weights: &SortWeights, min_max: &MinMaxTable) -> f64 {
    weights
        .active()
        .map(|(criterion, weight)| {
            let value = criterion.value(entry);
            let normalized = match min_max.get(&criterion) {
                Some(range) => normalize(value, range.min, range.max),
                None => 0.5,
            };
            if weight > 0.0 {
                normalized * weight.abs()
            } else {
                (1.0 - normalized) * weight.abs()
            }
        })
        .sum()
}

/// Score every entry and order them by descending score. Ties keep their
/// input order.
pub fn sort(entries: &[ScheduleEntry], weights: &SortWeights) -> Vec<ScheduleEntry> {
    let criteria: Vec<Criterion> = weights.active().map(|(c, _)| c).collect();
    let min_max = compute_min_max(entries, &criteria);

    let mut scored: Vec<ScheduleEntry> = entries
        .iter()
        .map(|entry| ScheduleEntry {
            score: score(entry, weights, &min_max),
            ..entry.clone()
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

pub fn load_weights(store: &dyn KeyValueStore) -> SortWeights {
    match storage::load_json::<Value>(store, SORT_WEIGHTS_KEY) {
        Ok(Some(Value::Object(record))) => SortWeights::from_record(&record),
        Ok(Some(_)) => {
            tracing::warn!("sort settings record is not an object");
            SortWeights::default()
        }
        Ok(None) => SortWeights::default(),
        Err(err) => {
            tracing::warn!(%err, "error loading sort settings");
            SortWeights::default()
        }
    }
}

pub fn save_weights(store: &dyn KeyValueStore, weights: &SortWeights) -> Result<(), StorageError> {
    storage::save_json(store, SORT_WEIGHTS_KEY, &weights.to_record())
}

/// Sort state for one rendered list: the order captured at construction,
/// the current order and the weights that produced it.
pub struct SortEngine {
    store: Rc<dyn KeyValueStore>,
    original: Vec<ScheduleEntry>,
    order: Vec<ScheduleEntry>,
    weights: SortWeights,
}

impl SortEngine {
    /// Capture `entries` as the original order and re-apply any saved
    /// weights.
    pub fn new(entries: Vec<ScheduleEntry>, store: Rc<dyn KeyValueStore>) -> Self {
        let weights = load_weights(store.as_ref());
        let mut engine = Self {
            store,
            original: entries.clone(),
            order: entries,
            weights,
        };
        if !engine.weights.is_neutral() {
            tracing::info!("re-applying saved sort weights");
            engine.resort();
        }
        engine
    }

    pub fn weights(&self) -> &SortWeights {
        &self.weights
    }

    pub fn order(&self) -> &[ScheduleEntry] {
        &self.order
    }

    pub fn original(&self) -> &[ScheduleEntry] {
        &self.original
    }

    /// Update one slider, re-sort and persist. A failed save leaves the
    /// new order in place.
    pub fn set_weight(&mut self, criterion: Criterion, weight: f64) -> Result<(), StorageError> {
        self.weights.set(criterion, weight);
        self.resort();
        save_weights(self.store.as_ref(), &self.weights)
            .inspect_err(|err| tracing::warn!(%err, "error saving sort settings"))
    }

    pub fn resort(&mut self) {
        self.order = sort(&self.original, &self.weights);
    }

    /// Back to the original order with every weight at zero; forgets the
    /// saved weights.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.weights = SortWeights::default();
        self.order = self.original.clone();
        self.store
            .remove(SORT_WEIGHTS_KEY)
            .inspect_err(|err| tracing::warn!(%err, "error clearing sort settings"))
    }

    /// List positions in display order. Positions in `0..total` that were
    /// never scored (unreadable cards) follow in their original order.
    pub fn display_positions(&self, total: usize) -> Vec<usize> {
        let mut positions: Vec<usize> = self.order.iter().map(|e| e.position).collect();
        let unscored: Vec<usize> = (0..total).filter(|p| !positions.contains(p)).collect();
        positions.extend(unscored);
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use serde_json::json;

    fn entry(name: &str, position: usize, weekend_hours: u32, night_count: u32) -> ScheduleEntry {
        ScheduleEntry {
            weekend_hours,
            night_count,
            ..ScheduleEntry::new(name, position)
        }
    }

    fn names(entries: &[ScheduleEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Vec<ScheduleEntry> {
        vec![entry("A", 0, 10, 2), entry("B", 1, 30, 2), entry("C", 2, 20, 5)]
    }

    #[test]
    fn neutral_weights_keep_input_order() {
        let sorted = sort(&sample(), &SortWeights::default());
        assert_eq!(names(&sorted), ["A", "B", "C"]);
        assert!(sorted.iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn positive_weight_sorts_descending_by_raw_value() {
        let weights = SortWeights::default().with(Criterion::Helgetimer, 1.0);
        assert_eq!(names(&sort(&sample(), &weights)), ["B", "C", "A"]);
    }

    #[test]
    fn negative_weight_sorts_ascending_by_raw_value() {
        let weights = SortWeights::default().with(Criterion::Helgetimer, -0.4);
        assert_eq!(names(&sort(&sample(), &weights)), ["A", "C", "B"]);
    }

    #[test]
    fn ties_keep_input_order() {
        // Night counts 2, 2, 5: A and B tie.
        let weights = SortWeights::default().with(Criterion::Night, -1.0);
        let first = sort(&sample(), &weights);
        assert_eq!(names(&first), ["A", "B", "C"]);
        let again = sort(&first, &weights);
        assert_eq!(names(&again), ["A", "B", "C"]);
    }

    #[test]
    fn scores_combine_normalized_contributions() {
        let entries = sample();
        let weights = SortWeights::default()
            .with(Criterion::Helgetimer, 1.0)
            .with(Criterion::Night, -0.5);
        let table = compute_min_max(&entries, &[Criterion::Helgetimer, Criterion::Night]);
        // C: helgetimer (20-10)/20 = 0.5; night (5-2)/3 = 1 -> (1-1)*0.5 = 0
        assert!((score(&entries[2], &weights, &table) - 0.5).abs() < 1e-9);
        // A: 0 + (1-0)*0.5
        assert!((score(&entries[0], &weights, &table) - 0.5).abs() < 1e-9);
        // B: 1 + 0.5
        assert!((score(&entries[1], &weights, &table) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_criteria_do_not_reorder() {
        let entries = vec![entry("A", 0, 8, 1), entry("B", 1, 8, 1)];
        let weights = SortWeights::default().with(Criterion::Helgetimer, 1.0);
        let sorted = sort(&entries, &weights);
        assert_eq!(names(&sorted), ["A", "B"]);
        assert!(sorted.iter().all(|e| e.score == 0.5));
    }

    #[test]
    fn weights_are_clamped_and_zero_drops_the_criterion() {
        let mut weights = SortWeights::default();
        weights.set(Criterion::Early, 3.0);
        weights.set(Criterion::Night, f64::NAN);
        assert_eq!(weights.get(Criterion::Early), 1.0);
        assert_eq!(weights.get(Criterion::Night), 0.0);
        weights.set(Criterion::Early, 0.0);
        assert!(weights.is_neutral());
    }

    #[test]
    fn records_accept_numeric_strings() {
        let record = json!({
            "helgetimer": "0.5",
            "natt": -1,
            "tidlig": "0",
            "before_6": "lots",
            "mystery": 1
        });
        let weights = SortWeights::from_record(record.as_object().unwrap());
        assert_eq!(weights.get(Criterion::Helgetimer), 0.5);
        assert_eq!(weights.get(Criterion::Night), -1.0);
        assert_eq!(
            weights.summary(),
            vec![
                (Criterion::Helgetimer, SortDirection::HighToLow),
                (Criterion::Night, SortDirection::LowToHigh)
            ]
        );
        assert_eq!(weights.to_record().len(), Criterion::ALL.len());
    }

    #[test]
    fn engine_persists_and_reapplies_weights() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());
        let mut engine = SortEngine::new(sample(), store.clone());
        assert_eq!(names(engine.order()), ["A", "B", "C"]);

        engine.set_weight(Criterion::Helgetimer, 1.0).unwrap();
        assert_eq!(names(engine.order()), ["B", "C", "A"]);

        let reloaded = SortEngine::new(sample(), store.clone());
        assert_eq!(reloaded.weights().get(Criterion::Helgetimer), 1.0);
        assert_eq!(names(reloaded.order()), ["B", "C", "A"]);
        assert_eq!(names(reloaded.original()), ["A", "B", "C"]);
    }

    #[test]
    fn reset_restores_original_order_and_clears_storage() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());
        let mut engine = SortEngine::new(sample(), store.clone());
        engine.set_weight(Criterion::Helgetimer, -1.0).unwrap();
        engine.reset().unwrap();

        assert_eq!(names(engine.order()), ["A", "B", "C"]);
        assert!(engine.weights().is_neutral());
        assert!(store.get(SORT_WEIGHTS_KEY).unwrap().is_none());
    }

    #[test]
    fn failed_save_keeps_the_new_order() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::with_quota(4));
        let mut engine = SortEngine::new(sample(), store);
        assert!(engine.set_weight(Criterion::Helgetimer, 1.0).is_err());
        assert_eq!(names(engine.order()), ["B", "C", "A"]);
    }

    #[test]
    fn failed_reset_still_restores_the_original_order() {
        struct ReadOnly(MemoryStore);
        impl KeyValueStore for ReadOnly {
            fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
                self.0.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
                self.0.set(key, value)
            }
            fn remove(&self, _key: &str) -> Result<(), StorageError> {
                Err(StorageError::Backend("read-only".into()))
            }
        }

        let store: Rc<dyn KeyValueStore> = Rc::new(ReadOnly(MemoryStore::default()));
        let mut engine = SortEngine::new(sample(), store.clone());
        engine.set_weight(Criterion::Helgetimer, 1.0).unwrap();

        assert!(engine.reset().is_err());
        assert_eq!(names(engine.order()), ["A", "B", "C"]);
        assert!(engine.weights().is_neutral());
        assert!(store.get(SORT_WEIGHTS_KEY).unwrap().is_some());
    }

    #[test]
    fn unscored_positions_trail_the_sorted_ones() {
        let entries = vec![entry("A", 0, 1, 0), entry("C", 2, 9, 0)];
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());
        let mut engine = SortEngine::new(entries, store);
        engine.set_weight(Criterion::Helgetimer, 1.0).unwrap();
        assert_eq!(engine.display_positions(3), vec![2, 0, 1]);
    }

    #[test]
    fn badge_classes() {
        assert_eq!(badge_class(0.3), "badge bg-success");
        assert_eq!(badge_class(0.0), "badge bg-secondary");
        assert_eq!(badge_class(-0.3), "badge bg-secondary");
    }
}
