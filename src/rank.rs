//! Composite rank calculation: normalize, aggregate, bucket, assemble.

use serde::{Deserialize, Serialize};

use crate::config::RankConfig;
use crate::distribution::{exponential_cdf, log_normal_cdf};
use crate::errors::{RankError, Result};
use crate::metrics::MetricsInput;
use crate::score_types::{Percentile, UnitScore};

/// The six scored metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Commits,
    PullRequests,
    Issues,
    Reviews,
    Stars,
    Followers,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::Commits => "commits",
            Metric::PullRequests => "pull requests",
            Metric::Issues => "issues",
            Metric::Reviews => "reviews",
            Metric::Stars => "stars",
            Metric::Followers => "followers",
        };
        write!(f, "{}", name)
    }
}

/// Which normalization curve a metric's ratio runs through.
enum Curve {
    Exponential,
    LogNormal,
}

impl Curve {
    fn apply(&self, ratio: f64) -> f64 {
        match self {
            Curve::Exponential => exponential_cdf(ratio),
            Curve::LogNormal => log_normal_cdf(ratio),
        }
    }
}

/// One metric's share of the aggregate, kept for caller-side breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: Metric,
    /// Raw count as supplied by the caller
    pub raw: f64,
    /// Calibration median the raw count was divided by
    pub median: f64,
    pub weight: f64,
    /// Normalized CDF score of raw / median
    pub score: UnitScore,
    /// weight * score
    pub contribution: f64,
}

/// Full per-metric breakdown of a rank, derived from and owned by its
/// `RankResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankBreakdown {
    pub scores: Vec<MetricScore>,
    pub total_weighted_score: f64,
    pub max_possible_score: f64,
}

/// Outcome of a rank calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    /// Matched grade label
    pub level: String,
    /// Aggregate percentile, lower = better
    pub percentile: Percentile,
    pub breakdown: RankBreakdown,
}

/// Compute the composite rank for a profile.
///
/// Validates the input at the boundary, normalizes each metric against its
/// calibration median, aggregates the weighted scores, and buckets the
/// resulting percentile into a grade. Pure apart from trace logging: the
/// same input and configuration always produce the same result.
pub fn calculate_rank(input: &MetricsInput, config: &RankConfig) -> Result<RankResult> {
    input.validate()?;

    let calibration = &config.calibration;
    let rows = [
        (
            Metric::Commits,
            input.commits,
            calibration.commit_median(input.all_commits),
            calibration.commits_weight,
            Curve::Exponential,
        ),
        (
            Metric::PullRequests,
            input.prs,
            calibration.prs_median,
            calibration.prs_weight,
            Curve::Exponential,
        ),
        (
            Metric::Issues,
            input.issues,
            calibration.issues_median,
            calibration.issues_weight,
            Curve::Exponential,
        ),
        (
            Metric::Reviews,
            input.reviews,
            calibration.reviews_median,
            calibration.reviews_weight,
            Curve::Exponential,
        ),
        (
            Metric::Stars,
            input.stars,
            calibration.stars_median,
            calibration.stars_weight,
            Curve::LogNormal,
        ),
        (
            Metric::Followers,
            input.followers,
            calibration.followers_median,
            calibration.followers_weight,
            Curve::LogNormal,
        ),
    ];

    let scores: Vec<MetricScore> = rows
        .into_iter()
        .map(|(metric, raw, median, weight, curve)| {
            let score = curve.apply(raw / median);
            MetricScore {
                metric,
                raw,
                median,
                weight,
                score: UnitScore::new(score),
                contribution: weight * score,
            }
        })
        .collect();

    let total_weighted_score: f64 = scores.iter().map(|s| s.contribution).sum();
    let max_possible_score = calibration.total_weight();

    let rank = 1.0 - total_weighted_score / max_possible_score;
    let percentile = UnitScore::new(rank).to_percentile();

    let level = config
        .grades
        .level_for(percentile)
        .ok_or_else(|| RankError::Configuration("grade table is empty".to_string()))?
        .to_string();

    log::debug!(
        "rank computed: percentile {} level {} (weighted {:.3} of {:.3})",
        percentile,
        level,
        total_weighted_score,
        max_possible_score
    );

    Ok(RankResult {
        level,
        percentile,
        breakdown: RankBreakdown {
            scores,
            total_weighted_score,
            max_possible_score,
        },
    })
}
