//! dispute-cli - analyze a credit report and draft dispute letters
//!
//! Reads a .txt or .pdf credit report, runs the pattern-based finding
//! extractor, and optionally renders dispute letters for each finding,
//! fanned out per configured bureau. One document per invocation, no
//! state between runs.

use anyhow::Result;
use clap::Parser;
use dispute_engine::DisputeEngine;
use letter_engine::{export, LetterConfig, LetterOutput};
use report_loader::ReportLoader;
use std::path::Path;
use tracing::info;

mod cli;
mod output;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let today = cli
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let document = ReportLoader::load_path(&cli.report)?;
    info!(file = %document.filename, pages = document.page_count, "report loaded");

    let engine = DisputeEngine::new();
    let analysis = engine.analyze(&document, today);

    let config = match &cli.config {
        Some(path) => cli::load_config(path)?,
        None => LetterConfig::default(),
    };

    let want_letters = cli.letters || cli.export.is_some();
    let letters = want_letters.then(|| letter_engine::generate(&analysis, &config, today));

    if cli.json {
        let mut payload = serde_json::json!({
            "report": {
                "filename": document.filename,
                "page_count": document.page_count,
            },
            "analysis": analysis,
        });
        if let Some(letters) = &letters {
            payload["letters"] = serde_json::to_value(letters)?;
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", output::render_findings(&document, &analysis));
        if let Some(letters) = &letters {
            print!("{}", output::render_letters(letters));
        }
    }

    if let (Some(dir), Some(letters)) = (&cli.export, &letters) {
        write_exports(dir, letters, cli.paginated)?;
    }

    Ok(())
}

/// Write the DisputeLetters artifacts into `dir`
///
/// Nothing is written for a no-findings run; the notice has already
/// been shown on the letters view.
fn write_exports(dir: &Path, letters: &LetterOutput, paginated: bool) -> Result<()> {
    let LetterOutput::Letters(list) = letters else {
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;

    let text_path = dir.join(export::text_filename());
    std::fs::write(&text_path, export::concatenated(list))?;
    info!(path = %text_path.display(), letters = list.len(), "wrote concatenated letters");

    if paginated {
        let pages_path = dir.join(export::paginated_filename());
        std::fs::write(&pages_path, export::paginated(list))?;
        info!(path = %pages_path.display(), "wrote paginated letters");
    }

    Ok(())
}
