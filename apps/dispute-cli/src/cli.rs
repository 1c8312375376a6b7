//! CLI argument definitions and configuration loading

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use letter_engine::LetterConfig;
use std::path::{Path, PathBuf};

/// Analyze a credit report and draft dispute letters for its findings.
#[derive(Debug, Parser)]
#[command(name = "dispute-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Credit report file (.txt or .pdf)
    pub report: PathBuf,

    /// Sender/bureau configuration file (TOML); omit for single-letter mode
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Analysis date override (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Generate dispute letters in addition to the findings report
    #[arg(short, long)]
    pub letters: bool,

    /// Directory to write the DisputeLetters artifacts into (implies --letters)
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Also write the paginated artifact (one letter per page)
    #[arg(long, requires = "export")]
    pub paginated: bool,

    /// Emit JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}': {e}"))
}

/// Load the sender/bureau configuration from a TOML file
pub fn load_config(path: &Path) -> anyhow::Result<LetterConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing configuration file {}", path.display()))
}
