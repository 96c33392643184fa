//! Trace event record as found in a Chrome-style trace document.
//!
//! Only the four fields the analysis needs are decoded; everything else
//! in a record (`pid`, `tid`, `args`, ...) is ignored.

use serde::{Deserialize, Deserializer};

/// Phase marker of a trace record (`ph`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `"B"` - start of a timed span
    Begin,
    /// `"E"` - end of a timed span
    End,
    /// Any other marker (instant, counter, metadata, ...)
    Other,
}

impl Phase {
    /// Map a raw `ph` value to a phase
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "B" => Phase::Begin,
            "E" => Phase::End,
            _ => Phase::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let marker = String::deserialize(deserializer)?;
        Ok(Phase::from_marker(&marker))
    }
}

/// A single record from the trace event stream
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceEvent {
    /// Operator (or metadata) name
    pub name: String,

    /// Category tag (`cat`)
    #[serde(default, rename = "cat")]
    pub category: String,

    /// Phase marker (`ph`)
    #[serde(rename = "ph")]
    pub phase: Phase,

    /// Timestamp in whole microseconds (`ts`).
    ///
    /// Fractional values are truncated per event before any subtraction, so
    /// a span from 0.9 to 1.1 measures 1 µs. Pair durations are exact only to
    /// within one microsecond.
    #[serde(rename = "ts", deserialize_with = "deserialize_timestamp")]
    pub timestamp: u64,
}

impl TraceEvent {
    /// Build an event directly (used by tests and synthetic streams)
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        phase: Phase,
        timestamp: u64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            phase,
            timestamp,
        }
    }

    /// Stand-in for a record that could not be decoded.
    ///
    /// Empty name and category, `Phase::Other`: never cataloged, never paired.
    pub fn placeholder() -> Self {
        Self::new("", "", Phase::Other, 0)
    }

    pub fn is_begin(&self) -> bool {
        self.phase == Phase::Begin
    }

    pub fn is_end(&self) -> bool {
        self.phase == Phase::End
    }
}

/// Accept integer, float or numeric-string timestamps.
///
/// Fractional microseconds are truncated.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    timestamp_from_value(&value)
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", value)))
}

fn timestamp_from_value(value: &serde_json::Value) -> Option<u64> {
    let micros = match value {
        serde_json::Value::Number(n) => return n.as_u64().or_else(|| whole_micros(n.as_f64()?)),
        serde_json::Value::String(s) => s.trim(),
        _ => return None,
    };

    micros
        .parse::<u64>()
        .ok()
        .or_else(|| whole_micros(micros.parse::<f64>().ok()?))
}

fn whole_micros(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value as u64)
}
