//! Derived statistics over the aggregate table.
//!
//! - Summary: every operator ranked by total time
//! - Layered: one operator split into per-layer, per-iteration timings

pub mod layered;
pub mod summary;

// Re-export main types and functions
pub use layered::{build_layered_breakdown, validate_iterations, LayerTiming, LayeredBreakdown};
pub use summary::{build_summary, SummaryReport, SummaryRow};
