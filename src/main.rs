use anyhow::{Context, Result};
use clap::Parser;
use devrank::cli::Cli;
use devrank::config::{self, RankConfig};
use devrank::metrics::MetricsInput;
use devrank::output;
use devrank::rank::calculate_rank;
use std::fs;
use std::io::Read;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => RankConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => config::load_config(),
    };

    let input = read_metrics(cli.input.as_deref())?;
    let result = calculate_rank(&input, &config)?;
    let rendered = output::render(&result, cli.format)?;

    match cli.output {
        Some(path) => fs::write(&path, rendered + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Read a metrics document from a file path, or stdin for "-"/absent.
fn read_metrics(path: Option<&Path>) -> Result<MetricsInput> {
    let contents = match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read metrics from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&contents).context("failed to parse metrics JSON")
}
