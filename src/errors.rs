//! Shared error types for rank calculation

use thiserror::Error;

/// Main error type for devrank operations
#[derive(Debug, Error)]
pub enum RankError {
    /// A metric supplied by the caller was negative or non-finite
    #[error("invalid metric `{metric}`: {value} (metrics must be finite and non-negative)")]
    InvalidMetric { metric: &'static str, value: f64 },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RankError {
    /// Create an invalid-metric error for a named input field
    pub fn invalid_metric(metric: &'static str, value: f64) -> Self {
        Self::InvalidMetric { metric, value }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, RankError>;
