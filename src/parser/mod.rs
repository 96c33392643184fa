//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Defining the trace event record
//! - Loading the event array from a trace document
//! - Skipping malformed records

pub mod schema;
pub mod trace_events;

// Re-export main types
pub use schema::{Phase, TraceEvent};
pub use trace_events::{parse_trace_events, read_trace_file};
