//! Input record for a profile's activity metrics.

use serde::{Deserialize, Serialize};

use crate::errors::{RankError, Result};

/// Raw activity metrics for a single profile, as extracted by the caller.
///
/// All counts are non-negative finite numbers. `all_commits` records whether
/// the commit count was gathered across all repositories, which selects a
/// higher calibration median. `repos` is accepted for caller compatibility
/// but does not participate in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsInput {
    #[serde(default)]
    pub commits: f64,
    #[serde(default)]
    pub prs: f64,
    #[serde(default)]
    pub issues: f64,
    #[serde(default)]
    pub reviews: f64,
    #[serde(default)]
    pub stars: f64,
    #[serde(default)]
    pub followers: f64,
    /// Commit count includes all repositories, not just owned ones
    #[serde(default)]
    pub all_commits: bool,
    /// Repository count, unused in scoring
    #[serde(default)]
    pub repos: f64,
}

impl MetricsInput {
    /// Validate that every numeric field is finite and non-negative.
    ///
    /// Negative ratios would break the monotonicity of the CDF transforms,
    /// so malformed inputs are rejected here at the boundary instead of
    /// flowing through the calculation.
    pub fn validate(&self) -> Result<()> {
        for (metric, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(RankError::invalid_metric(metric, value));
            }
        }
        Ok(())
    }

    /// Numeric fields paired with their wire names, scored metrics first.
    fn named_values(&self) -> [(&'static str, f64); 7] {
        [
            ("commits", self.commits),
            ("prs", self.prs),
            ("issues", self.issues),
            ("reviews", self.reviews),
            ("stars", self.stars),
            ("followers", self.followers),
            ("repos", self.repos),
        ]
    }
}
