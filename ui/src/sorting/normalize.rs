//! Per-criterion min/max over a dataset and scaling into `[0, 1]`.

use std::collections::BTreeMap;

use super::criteria::{Criterion, ScheduleEntry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

pub type MinMaxTable = BTreeMap<Criterion, MinMax>;

/// Min and max of each criterion across `entries`. Empty input yields an
/// empty table.
pub fn compute_min_max(entries: &[ScheduleEntry], criteria: &[Criterion]) -> MinMaxTable {
    let mut table = MinMaxTable::new();
    for entry in entries {
        for &criterion in criteria {
            let value = criterion.value(entry);
            table
                .entry(criterion)
                .and_modify(|mm| {
                    mm.min = mm.min.min(value);
                    mm.max = mm.max.max(value);
                })
                .or_insert(MinMax {
                    min: value,
                    max: value,
                });
        }
    }
    table
}

/// Position of `value` between `min` and `max`. A degenerate range
/// (`min == max`) maps everything to `0.5`.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, weekend_hours: u32, night_count: u32) -> ScheduleEntry {
        ScheduleEntry {
            weekend_hours,
            night_count,
            ..ScheduleEntry::new(name, 0)
        }
    }

    #[test]
    fn endpoints_and_degenerate_ranges() {
        assert_eq!(normalize(10.0, 10.0, 30.0), 0.0);
        assert_eq!(normalize(30.0, 10.0, 30.0), 1.0);
        assert_eq!(normalize(20.0, 10.0, 30.0), 0.5);
        assert_eq!(normalize(3.0, 7.0, 7.0), 0.5);
        assert_eq!(normalize(-100.0, 0.0, 0.0), 0.5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(normalize(40.0, 10.0, 30.0), 1.0);
        assert_eq!(normalize(0.0, 10.0, 30.0), 0.0);
    }

    #[test]
    fn min_max_per_criterion() {
        let entries = vec![entry("a", 10, 4), entry("b", 30, 4), entry("c", 20, 4)];
        let table = compute_min_max(&entries, &[Criterion::Helgetimer, Criterion::Night]);
        assert_eq!(table[&Criterion::Helgetimer], MinMax { min: 10.0, max: 30.0 });
        assert_eq!(table[&Criterion::Night], MinMax { min: 4.0, max: 4.0 });
        assert!(!table.contains_key(&Criterion::Early));
    }

    #[test]
    fn empty_dataset_has_no_ranges() {
        assert!(compute_min_max(&[], &Criterion::ALL).is_empty());
    }
}
