//! Formatters for finished reports.
//!
//! This module turns reports into console output:
//! - Fixed-width text tables (milliseconds)
//! - Pretty-printed JSON (raw microseconds)
//!
//! Nothing is written to disk.

pub mod json;
pub mod table;

// Re-export main functions
pub use json::to_json;
pub use table::{render_layered_table, render_operator_list, render_summary_table};

use crate::report::{LayeredBreakdown, SummaryReport};
use crate::utils::error::OutputError;

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render the global summary in the requested format
pub fn render_summary(report: &SummaryReport, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(render_summary_table(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Render a layered breakdown in the requested format
pub fn render_layered(
    breakdown: &LayeredBreakdown,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(render_layered_table(breakdown)),
        OutputFormat::Json => to_json(breakdown),
    }
}
