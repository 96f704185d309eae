//! Source parsers
//!
//! Two independent front ends feed the merger: JSON files with free-form keys
//! and plaintext notes with "Key: Value" blocks. Both produce fully canonical
//! [`Record`](crate::Record)s via the alias table.

mod json;
mod notes;

pub use json::read_json;
pub use notes::{parse_notes_blocks, read_notes};
