//! Configuration and constants for the CLI.

/// Trace file read when `--file` is not given
pub const DEFAULT_TRACE_FILE: &str = "profile.json";

/// Operator shown by the layered report when `--op` is not given
pub const DEFAULT_OPERATOR: &str = "conv";

/// Category tag carried by operator events
pub const OPERATOR_CATEGORY: &str = "operator";

/// Metadata event name that shares the operator category but is not an operator
pub const PROCESS_NAME_EVENT: &str = "process_name";

/// Field holding the event array in a trace document
pub const TRACE_EVENTS_FIELD: &str = "traceEvents";

// Timestamps are microseconds; reports display milliseconds
pub const MICROS_PER_MILLI: f64 = 1000.0;

/// Iterations that are reported individually before the steady-state average
pub const WARMUP_ITERATIONS: usize = 3;

/// Convert a microsecond quantity to milliseconds for display
pub fn micros_to_millis(micros: f64) -> f64 {
    micros / MICROS_PER_MILLI
}
