//! Type-safe score scales for the rank pipeline.
//!
//! This module provides newtype wrappers for the two scales the calculation
//! moves between. By encoding the scale in the type system, we prevent bugs
//! caused by mixing incompatible ranges.
//!
//! # Score Scales
//!
//! - `UnitScore`: normalized 0-1 scale produced by the CDF transforms and
//!   the weighted aggregate
//! - `Percentile`: 0-100 scale of the final rank, where lower is better
//!
//! # Examples
//!
//! ```rust
//! use devrank::score_types::{Percentile, UnitScore};
//!
//! // Out-of-bounds values are clamped
//! let score = UnitScore::new(1.5);
//! assert_eq!(score.value(), 1.0);
//!
//! // Explicit conversion between scales
//! let percentile: Percentile = UnitScore::new(0.5).to_percentile();
//! assert_eq!(percentile.value(), 50.0);
//! ```

use serde::{Deserialize, Serialize};

/// Normalized score on the 0-1 scale.
///
/// Every per-metric CDF output and the weighted aggregate live on this
/// scale. Values are automatically clamped to the [0.0, 1.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    /// Create a new normalized score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to the 0-100 percentile scale by multiplying by 100.
    pub fn to_percentile(self) -> Percentile {
        Percentile(self.0 * 100.0)
    }
}

/// Rank percentile on the 0-100 scale, lower = better.
///
/// A percentile of 0 means the profile outperforms effectively every
/// comparable profile; 100 means it outperforms none. Values are
/// automatically clamped to the [0.0, 100.0] range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    /// Create a new percentile, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw percentile value.
    pub fn value(self) -> f64 {
        self.0
    }
}

// Display for user-facing output
impl std::fmt::Display for UnitScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl std::fmt::Display for Percentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
