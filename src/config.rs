//! Process-wide rank configuration: calibration constants and grade table.
//!
//! Configuration is fixed domain data, not user input. Defaults are built
//! in; a `.devrank.toml` in the working directory (or any ancestor) may
//! override individual values. Invalid overrides warn and fall back to the
//! defaults rather than aborting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::errors::{RankError, Result};
use crate::grade::GradeTable;

/// Calibration constants for the six scored metrics.
///
/// Each metric carries a median (the "typical" value used as normalization
/// divisor) and a weight (its share of the aggregate). Commits have two
/// medians because counting across all repositories inflates raw counts
/// and needs a higher bar for equivalent credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Commit median when only owned repositories were counted
    #[serde(default = "default_commits_median")]
    pub commits_median: f64,

    /// Commit median when the count spans all repositories
    #[serde(default = "default_commits_all_median")]
    pub commits_all_median: f64,

    #[serde(default = "default_commits_weight")]
    pub commits_weight: f64,

    #[serde(default = "default_prs_median")]
    pub prs_median: f64,

    #[serde(default = "default_prs_weight")]
    pub prs_weight: f64,

    #[serde(default = "default_issues_median")]
    pub issues_median: f64,

    #[serde(default = "default_issues_weight")]
    pub issues_weight: f64,

    #[serde(default = "default_reviews_median")]
    pub reviews_median: f64,

    #[serde(default = "default_reviews_weight")]
    pub reviews_weight: f64,

    #[serde(default = "default_stars_median")]
    pub stars_median: f64,

    #[serde(default = "default_stars_weight")]
    pub stars_weight: f64,

    #[serde(default = "default_followers_median")]
    pub followers_median: f64,

    #[serde(default = "default_followers_weight")]
    pub followers_weight: f64,
}

fn default_commits_median() -> f64 {
    80.0
}

fn default_commits_all_median() -> f64 {
    400.0
}

fn default_commits_weight() -> f64 {
    4.0
}

fn default_prs_median() -> f64 {
    15.0
}

fn default_prs_weight() -> f64 {
    3.0
}

fn default_issues_median() -> f64 {
    2.0
}

fn default_issues_weight() -> f64 {
    2.0
}

fn default_reviews_median() -> f64 {
    2.0
}

fn default_reviews_weight() -> f64 {
    1.5
}

fn default_stars_median() -> f64 {
    0.1
}

fn default_stars_weight() -> f64 {
    1.0
}

fn default_followers_median() -> f64 {
    2.0
}

fn default_followers_weight() -> f64 {
    0.5
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            commits_median: default_commits_median(),
            commits_all_median: default_commits_all_median(),
            commits_weight: default_commits_weight(),
            prs_median: default_prs_median(),
            prs_weight: default_prs_weight(),
            issues_median: default_issues_median(),
            issues_weight: default_issues_weight(),
            reviews_median: default_reviews_median(),
            reviews_weight: default_reviews_weight(),
            stars_median: default_stars_median(),
            stars_weight: default_stars_weight(),
            followers_median: default_followers_median(),
            followers_weight: default_followers_weight(),
        }
    }
}

impl CalibrationConfig {
    /// Commit median for the given counting mode.
    pub fn commit_median(&self, all_commits: bool) -> f64 {
        if all_commits {
            self.commits_all_median
        } else {
            self.commits_median
        }
    }

    /// Sum of all metric weights, the denominator of the aggregate.
    pub fn total_weight(&self) -> f64 {
        self.commits_weight
            + self.prs_weight
            + self.issues_weight
            + self.reviews_weight
            + self.stars_weight
            + self.followers_weight
    }

    fn validate_median(value: f64, name: &str) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(RankError::Configuration(format!(
                "{} median must be a positive finite number, found {}",
                name, value
            )))
        }
    }

    fn validate_weight(value: f64, name: &str) -> Result<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(RankError::Configuration(format!(
                "{} weight must be a non-negative finite number, found {}",
                name, value
            )))
        }
    }

    /// Check that all medians divide safely and the weights form a usable
    /// aggregate.
    pub fn validate(&self) -> Result<()> {
        let medians = [
            (self.commits_median, "commits"),
            (self.commits_all_median, "commits (all repositories)"),
            (self.prs_median, "prs"),
            (self.issues_median, "issues"),
            (self.reviews_median, "reviews"),
            (self.stars_median, "stars"),
            (self.followers_median, "followers"),
        ];
        for (value, name) in medians {
            Self::validate_median(value, name)?;
        }

        let weights = [
            (self.commits_weight, "commits"),
            (self.prs_weight, "prs"),
            (self.issues_weight, "issues"),
            (self.reviews_weight, "reviews"),
            (self.stars_weight, "stars"),
            (self.followers_weight, "followers"),
        ];
        for (value, name) in weights {
            Self::validate_weight(value, name)?;
        }

        if self.total_weight() <= 0.0 {
            return Err(RankError::Configuration(
                "total metric weight must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Complete rank configuration: calibration plus grade table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default)]
    pub calibration: CalibrationConfig,

    #[serde(default)]
    pub grades: GradeTable,
}

impl RankConfig {
    /// Validate calibration and grade table together.
    pub fn validate(&self) -> Result<()> {
        self.calibration.validate()?;
        self.grades.validate()
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RankConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from an explicit file path.
    ///
    /// Unlike the ancestor-directory discovery, an explicitly named file
    /// that fails to parse or validate is an error, not a fallback.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = read_config_file(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = ".devrank.toml";

/// Cache the configuration
static CONFIG: OnceLock<RankConfig> = OnceLock::new();

fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn try_load_config_from_path(config_path: &Path) -> Option<RankConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match RankConfig::from_toml_str(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using default configuration.",
                config_path.display(),
                e
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration by searching the current directory and its ancestors
/// for a `.devrank.toml`, falling back to defaults.
pub fn load_config() -> RankConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using defaults.", e);
            return RankConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No config file found. Using default configuration.");
            RankConfig::default()
        })
}

/// Process-wide configuration, loaded once on first access and never
/// mutated thereafter.
pub fn get_config() -> &'static RankConfig {
    CONFIG.get_or_init(load_config)
}
