//! Rendering of rank results for the CLI shell.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::cli::OutputFormat;
use crate::errors::Result;
use crate::rank::RankResult;

/// Render a result in the requested format.
pub fn render(result: &RankResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Terminal => Ok(render_terminal(result)),
    }
}

fn render_terminal(result: &RankResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Metric",
        "Raw",
        "Median",
        "Weight",
        "Score",
        "Contribution",
    ]);

    for score in &result.breakdown.scores {
        table.add_row(vec![
            Cell::new(score.metric.to_string()),
            numeric_cell(score.raw),
            numeric_cell(score.median),
            numeric_cell(score.weight),
            Cell::new(format!("{}", score.score)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", score.contribution)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "Level: {}   (top {} percentile)\n\n{}\n\nWeighted score: {:.3} / {:.1}",
        colorize_level(&result.level),
        result.percentile,
        table,
        result.breakdown.total_weighted_score,
        result.breakdown.max_possible_score
    )
}

fn numeric_cell(value: f64) -> Cell {
    Cell::new(format!("{}", value)).set_alignment(CellAlignment::Right)
}

/// Color the grade by band family: S green, A cyan, B yellow, rest red.
fn colorize_level(level: &str) -> String {
    let colored = match level.chars().next() {
        Some('S') => level.bright_green().bold(),
        Some('A') => level.cyan().bold(),
        Some('B') => level.yellow().bold(),
        _ => level.red().bold(),
    };
    colored.to_string()
}
