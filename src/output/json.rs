//! JSON rendering of reports.

use crate::utils::error::OutputError;
use serde::Serialize;

/// Serialize a report to pretty-printed JSON
///
/// **Public** - used for `--format json`
///
/// # Errors
/// * `OutputError::SerializationFailed` - value cannot be represented as JSON
pub fn to_json<T: Serialize + ?Sized>(report: &T) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}
