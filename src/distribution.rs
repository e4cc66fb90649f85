//! CDF approximations used to normalize raw metric counts.
//!
//! Each curve maps a non-negative ratio (raw value / calibration median) to
//! a bounded score: 0 at the origin, approaching 1 as the ratio grows.
//! Both are monotonically increasing, which is what keeps the aggregate
//! percentile monotone in every input metric.

/// Exponential CDF: `1 - 2^(-x)`.
///
/// Models metrics with diminishing marginal credit for quantity (commits,
/// pull requests, issues, reviews). A ratio of 1, raw value equal to the
/// median, scores exactly 0.5.
pub fn exponential_cdf(x: f64) -> f64 {
    1.0 - 2f64.powf(-x)
}

/// Log-normal CDF stand-in: `x / (1 + x)`.
///
/// Used for heavier-tailed metrics (stars, followers). This is a deliberate
/// closed-form approximation chosen for monotonicity and boundedness, not
/// statistical fidelity; the grading distribution depends on this exact
/// curve, so it must not be swapped for a true log-normal CDF.
pub fn log_normal_cdf(x: f64) -> f64 {
    x / (1.0 + x)
}
