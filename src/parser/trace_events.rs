//! Load the trace event stream from a trace document.
//!
//! Accepts the Chrome trace-event object (`{"traceEvents": [...]}`) or a
//! bare array of events. Event order is preserved exactly as stored; no
//! sorting by timestamp is done here or anywhere downstream.
//!
//! Every record keeps its position. A record that cannot be decoded (metadata
//! without `ts`, for example) becomes a placeholder `Phase::Other` event, so
//! it still separates its neighbours when pairs are matched by adjacency.

use super::schema::TraceEvent;
use crate::utils::config::TRACE_EVENTS_FIELD;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and decode a trace file from disk
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened
/// * `ParseError::Json` - file is not valid JSON
/// * `ParseError::InvalidFormat` - JSON has no event array
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<TraceEvent>, ParseError> {
    let path = path.as_ref();

    debug!("Reading trace from: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_trace_events(&raw)
}

/// Extract the event stream from an already-decoded trace document
///
/// **Public** - used by `read_trace_file` and directly by tests
///
/// # Errors
/// * `ParseError::InvalidFormat` - document has no event array, or every
///   record in a non-empty array is malformed
pub fn parse_trace_events(raw: &serde_json::Value) -> Result<Vec<TraceEvent>, ParseError> {
    let records = match raw {
        serde_json::Value::Object(obj) => obj
            .get(TRACE_EVENTS_FIELD)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Trace object has no '{}' array",
                    TRACE_EVENTS_FIELD
                ))
            })?,
        serde_json::Value::Array(records) => {
            debug!("Trace is a bare event array");
            records
        }
        _ => {
            return Err(ParseError::InvalidFormat(
                "Trace must be a JSON object or array".to_string(),
            ))
        }
    };

    parse_records(records)
}

/// Parse array of event records
///
/// **Private** - internal parsing logic
fn parse_records(records: &[serde_json::Value]) -> Result<Vec<TraceEvent>, ParseError> {
    let mut events = Vec::with_capacity(records.len());
    let mut decoded = 0usize;

    for (index, record) in records.iter().enumerate() {
        match TraceEvent::deserialize(record) {
            Ok(event) => {
                decoded += 1;
                events.push(event);
            }
            Err(e) => {
                if is_span_marker(record) {
                    warn!("Undecodable begin/end record {}: {}", index, e);
                } else {
                    debug!("Record {} kept as placeholder: {}", index, e);
                }
                events.push(TraceEvent::placeholder());
            }
        }
    }

    if decoded == 0 && !records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All trace records failed to parse".to_string(),
        ));
    }

    debug!("Decoded {} of {} trace records", decoded, records.len());

    Ok(events)
}

fn is_span_marker(record: &serde_json::Value) -> bool {
    matches!(record.get("ph").and_then(|ph| ph.as_str()), Some("B" | "E"))
}
