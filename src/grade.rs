//! Grade bucketing: mapping a percentile onto an ordered threshold table.

use serde::{Deserialize, Serialize};

use crate::errors::{RankError, Result};
use crate::score_types::Percentile;

/// One band of the grade table: the largest percentile that still earns
/// `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub threshold: f64,
    pub label: String,
}

impl GradeBand {
    fn new(threshold: f64, label: &str) -> Self {
        Self {
            threshold,
            label: label.to_string(),
        }
    }
}

/// Ordered grade table, scanned ascending by threshold.
///
/// Thresholds are inclusive: a percentile exactly equal to a threshold maps
/// to that threshold's label. The table is small and fixed, so lookup is a
/// linear scan rather than a binary search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeTable {
    bands: Vec<GradeBand>,
}

impl Default for GradeTable {
    fn default() -> Self {
        Self {
            bands: vec![
                GradeBand::new(1.0, "S++"),
                GradeBand::new(12.5, "S+"),
                GradeBand::new(25.0, "S"),
                GradeBand::new(37.5, "A++"),
                GradeBand::new(50.0, "A+"),
                GradeBand::new(62.5, "A"),
                GradeBand::new(75.0, "B+"),
                GradeBand::new(87.5, "B"),
                GradeBand::new(100.0, "C"),
            ],
        }
    }
}

impl GradeTable {
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Label of the first band whose threshold covers `percentile`.
    ///
    /// Falls back to the last (worst) band when the percentile exceeds every
    /// threshold, so the lookup is total for any clamped percentile. Returns
    /// `None` only for an empty table, which `validate` rejects.
    pub fn level_for(&self, percentile: Percentile) -> Option<&str> {
        self.bands
            .iter()
            .find(|band| percentile.value() <= band.threshold)
            .or_else(|| self.bands.last())
            .map(|band| band.label.as_str())
    }

    /// Check that the table is non-empty, strictly increasing, and covers
    /// the full percentile range.
    pub fn validate(&self) -> Result<()> {
        let last = self
            .bands
            .last()
            .ok_or_else(|| RankError::Configuration("grade table is empty".to_string()))?;

        for pair in self.bands.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(RankError::Configuration(format!(
                    "grade thresholds must be strictly increasing: {} followed by {}",
                    pair[0].threshold, pair[1].threshold
                )));
            }
        }

        if last.threshold != 100.0 {
            return Err(RankError::Configuration(format!(
                "grade table must end at threshold 100, found {}",
                last.threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(GradeTable::default().validate().is_ok());
    }

    #[test]
    fn best_percentile_earns_top_label() {
        let table = GradeTable::default();
        assert_eq!(table.level_for(Percentile::new(0.0)), Some("S++"));
    }

    #[test]
    fn worst_percentile_earns_bottom_label() {
        let table = GradeTable::default();
        assert_eq!(table.level_for(Percentile::new(100.0)), Some("C"));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let table = GradeTable::default();
        assert_eq!(table.level_for(Percentile::new(12.5)), Some("S+"));
        assert_eq!(table.level_for(Percentile::new(50.0)), Some("A+"));
        assert_eq!(table.level_for(Percentile::new(87.5)), Some("B"));
    }

    #[test]
    fn just_past_a_threshold_drops_a_band() {
        let table = GradeTable::default();
        assert_eq!(table.level_for(Percentile::new(12.51)), Some("S"));
    }

    #[test]
    fn overflow_falls_back_to_last_band() {
        // A truncated table whose upper bound is below 100 must still
        // resolve deterministically to its worst label.
        let table = GradeTable {
            bands: vec![GradeBand::new(10.0, "good"), GradeBand::new(60.0, "bad")],
        };
        assert_eq!(table.level_for(Percentile::new(99.0)), Some("bad"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = GradeTable { bands: vec![] };
        assert!(table.validate().is_err());
        assert_eq!(table.level_for(Percentile::new(50.0)), None);
    }

    #[test]
    fn non_increasing_thresholds_are_rejected() {
        let table = GradeTable {
            bands: vec![
                GradeBand::new(50.0, "a"),
                GradeBand::new(50.0, "b"),
                GradeBand::new(100.0, "c"),
            ],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn table_not_reaching_100_is_rejected() {
        let table = GradeTable {
            bands: vec![GradeBand::new(50.0, "a"), GradeBand::new(99.0, "b")],
        };
        assert!(table.validate().is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_percentile_gets_exactly_one_label(value in 0.0..=100.0f64) {
            let table = GradeTable::default();
            let level = table.level_for(Percentile::new(value));
            prop_assert!(level.is_some());
            let known = table.bands().iter().any(|b| Some(b.label.as_str()) == level);
            prop_assert!(known);
        }

        #[test]
        fn higher_percentile_never_earns_better_band(
            a in 0.0..=100.0f64,
            b in 0.0..=100.0f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let table = GradeTable::default();
            let index_of = |p: f64| {
                table
                    .bands()
                    .iter()
                    .position(|band| p <= band.threshold)
                    .unwrap_or(table.bands().len() - 1)
            };
            prop_assert!(index_of(lo) <= index_of(hi));
        }
    }
}
