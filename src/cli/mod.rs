//! Command-line interface
//!
//! One flat command: point `--csv` at the store, feed it any number of
//! `--from-json` / `--from-notes` sources, and optionally ask for Markdown
//! and Excel exports.

mod logging;

pub use logging::LogLevel;

use crate::{export, merge, parse, store, Result};
use clap::Parser;
use logging::{log, warn};
use std::path::PathBuf;

/// Append ChestX-ray14 benchmark entries to a CSV, with optional Markdown and Excel export
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "chestbench")]
#[command(author = "PAIML")]
#[command(version)]
pub struct Cli {
    /// Path to the CSV store to create or update
    #[arg(long, value_name = "PATH")]
    pub csv: PathBuf,

    /// JSON file with an array of entries (repeatable)
    #[arg(long = "from-json", value_name = "PATH")]
    pub from_json: Vec<PathBuf>,

    /// Plaintext notes file with "Key: Value" blocks (repeatable)
    #[arg(long = "from-notes", value_name = "PATH")]
    pub from_notes: Vec<PathBuf>,

    /// Optional path for the Markdown table export
    #[arg(long, value_name = "PATH")]
    pub md: Option<PathBuf>,

    /// Optional path for the Excel (.xlsx) export
    #[arg(long, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse CLI arguments from an iterator, for testing
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Execute one merge run from parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let existing = store::load(&cli.csv)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Loaded {} stored entries from {}", existing.len(), cli.csv.display()),
    );

    // All reads happen before the single store write, so a malformed source
    // aborts the run with the store untouched.
    let mut incoming = Vec::new();
    for path in &cli.from_json {
        let entries = parse::read_json(path)?;
        log(
            level,
            LogLevel::Verbose,
            &format!("Parsed {} entries from {}", entries.len(), path.display()),
        );
        incoming.extend(entries);
    }
    for path in &cli.from_notes {
        let entries = parse::read_notes(path)?;
        log(
            level,
            LogLevel::Verbose,
            &format!("Parsed {} entries from {}", entries.len(), path.display()),
        );
        incoming.extend(entries);
    }

    if incoming.is_empty() {
        log(
            level,
            LogLevel::Normal,
            "No new entries provided. Use --from-json or --from-notes.",
        );
        return Ok(());
    }

    let records = merge::merge(existing, incoming);
    store::save(&cli.csv, &records)?;
    log(
        level,
        LogLevel::Normal,
        &format!("Saved CSV with {} rows to {}", records.len(), cli.csv.display()),
    );

    if let Some(md_path) = &cli.md {
        std::fs::write(md_path, export::to_markdown(&records))?;
        log(
            level,
            LogLevel::Normal,
            &format!("Wrote Markdown table to {}", md_path.display()),
        );
    }

    if let Some(xlsx_path) = &cli.xlsx {
        match export::write_xlsx(xlsx_path, &records) {
            Ok(()) => log(
                level,
                LogLevel::Normal,
                &format!("Wrote Excel file to {}", xlsx_path.display()),
            ),
            Err(e) => warn(&format!(
                "Could not write Excel file '{}': {e}",
                xlsx_path.display()
            )),
        }
    }

    Ok(())
}
