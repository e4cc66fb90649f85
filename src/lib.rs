// Export modules for library usage
pub mod cli;
pub mod config;
pub mod distribution;
pub mod errors;
pub mod grade;
pub mod metrics;
pub mod output;
pub mod rank;
pub mod score_types;

// Re-export commonly used types
pub use crate::config::{get_config, load_config, CalibrationConfig, RankConfig};
pub use crate::errors::{RankError, Result};
pub use crate::grade::{GradeBand, GradeTable};
pub use crate::metrics::MetricsInput;
pub use crate::rank::{calculate_rank, Metric, MetricScore, RankBreakdown, RankResult};
pub use crate::score_types::{Percentile, UnitScore};
