//! chestbench: ChestX-ray14 benchmark table maintenance
//!
//! Merges benchmark entries from JSON files and plaintext "Key: Value" notes
//! into a canonical CSV dataset, deduplicating by (paper_year, model) and
//! sorting by reported AUC / F1. Optional Markdown and Excel exports.
//!
//! # Usage
//!
//! ```bash
//! # Merge two notes files and one json file, write CSV + MD + XLSX
//! chestbench --csv chestx_benchmarks.csv \
//!     --from-notes notes1.txt --from-notes notes2.txt \
//!     --from-json summaries.json \
//!     --md chestx_benchmarks.md \
//!     --xlsx chestx_benchmarks.xlsx
//! ```

pub mod cli;
pub mod export;
pub mod merge;
pub mod parse;
pub mod record;
pub mod store;

mod error;

pub use error::{Error, Result};
pub use record::{Field, Record};
