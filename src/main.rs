//! chestbench CLI
//!
//! # Usage
//!
//! ```bash
//! # Merge notes and JSON sources into the store, write all exports
//! chestbench --csv chestx_benchmarks.csv \
//!     --from-notes notes1.txt --from-notes notes2.txt \
//!     --from-json summaries.json \
//!     --md chestx_benchmarks.md \
//!     --xlsx chestx_benchmarks.xlsx
//! ```

use chestbench::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
