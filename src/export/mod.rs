//! Artifact exporters
//!
//! Renderers for the final record sequence: a Markdown table and an Excel
//! workbook. The Markdown export is plain string building; the xlsx export
//! returns its backend error so the caller can downgrade it to a warning.

mod markdown;
mod xlsx;

pub use markdown::to_markdown;
pub use xlsx::write_xlsx;
