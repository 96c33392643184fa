//! Op Trace Stats
//!
//! Operator-level timing statistics from trace-event profiles.
//!
//! The library takes a decoded trace event stream and produces:
//! - a global summary of every operator ranked by cumulative time
//! - a layered breakdown of one operator across repeated iterations,
//!   separating the first three (warm-up) iterations from the steady state
//!
//! ```ignore
//! let events = parser::read_trace_file("profile.json")?;
//! let catalog = aggregator::OperatorCatalog::from_events(&events);
//! let table = aggregator::aggregate_pairs(&events, &catalog, &aggregator::AdjacentMatcher);
//! let summary = report::build_summary(&table)?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod report;
pub mod utils;
