use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devrank")]
#[command(about = "Composite percentile rank and grade for a developer activity profile", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a JSON metrics document; "-" or absent reads stdin
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of .devrank.toml discovery
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored grade plus a per-metric breakdown table
    Terminal,
    /// Pretty-printed RankResult JSON
    Json,
}
