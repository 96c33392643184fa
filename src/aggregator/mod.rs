//! Aggregation of the trace event stream into per-operator timings.
//!
//! This module transforms parsed trace events into:
//! - The operator catalog (distinct operator names, first-seen order)
//! - Matched begin/end pairs, via a pluggable matching strategy
//! - Per-operator counts, totals and ordered duration lists

pub mod catalog;
pub mod matcher;
pub mod pairs;

// Re-export main types and functions
pub use catalog::OperatorCatalog;
pub use matcher::{AdjacentMatcher, MatcherKind, PairMatcher, StackMatcher};
pub use pairs::{aggregate_pairs, AggregateTable, OperatorAggregate};
