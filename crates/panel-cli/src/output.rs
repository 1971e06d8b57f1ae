//! Output rendering: tables for humans, JSON for scripts.

use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use panel_api::admin::types::RedeemCodeStatus;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

/// Render a list of items: a table of rows, or the items serialized as JSON.
pub fn render_list<T, R>(
    format: OutputFormat,
    items: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::sharp()).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Render a single item as a one-row table or a JSON object.
pub fn render_item<T, R>(
    format: OutputFormat,
    item: &T,
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Ok(Table::new([to_row(item)]).with(Style::sharp()).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
    }
}

pub fn print_output(out: &str) {
    println!("{out}");
}

/// Status cell with color cues for table output.
pub fn status_label(status: RedeemCodeStatus) -> String {
    match status {
        RedeemCodeStatus::Active => "active".green().to_string(),
        RedeemCodeStatus::Unused => "unused".yellow().to_string(),
        RedeemCodeStatus::Used => "used".dimmed().to_string(),
        RedeemCodeStatus::Expired => "expired".red().to_string(),
    }
}
