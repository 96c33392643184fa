//! Walk the event stream and accumulate matched begin/end pairs.
//!
//! Every cataloged operator gets an aggregate, even when it never forms a
//! pair. Durations are appended in stream order; the layered report relies
//! on that order to recover iteration identity.

use super::catalog::OperatorCatalog;
use super::matcher::PairMatcher;
use crate::parser::TraceEvent;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Running timings for one operator
///
/// **Public** - read by the reporters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperatorAggregate {
    name: String,
    count: usize,
    total_micros: u64,
    durations: Vec<u64>,
}

impl OperatorAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add one matched pair.
    ///
    /// Only mutation path, so `durations.len() == count` and
    /// `sum(durations) == total_micros` always hold.
    pub fn record(&mut self, duration_micros: u64) {
        self.count += 1;
        self.total_micros = self.total_micros.saturating_add(duration_micros);
        self.durations.push(duration_micros);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of matched pairs
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_micros(&self) -> u64 {
        self.total_micros
    }

    /// Individual pair durations, in stream order
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    pub fn min_micros(&self) -> Option<u64> {
        self.durations.iter().copied().min()
    }

    pub fn max_micros(&self) -> Option<u64> {
        self.durations.iter().copied().max()
    }

    pub fn average_micros(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total_micros as f64 / self.count as f64)
        }
    }
}

/// Aggregates for every cataloged operator, in catalog order
///
/// Built by `aggregate_pairs` and owned by its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    entries: Vec<OperatorAggregate>,
    index: HashMap<String, usize>,
}

impl AggregateTable {
    /// Empty aggregates for each catalog entry
    pub fn from_catalog(catalog: &OperatorCatalog) -> Self {
        let mut table = Self::default();
        for name in catalog.names() {
            table.index.insert(name.clone(), table.entries.len());
            table.entries.push(OperatorAggregate::new(name.clone()));
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&OperatorAggregate> {
        self.index.get(name).and_then(|&i| self.entries.get(i))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut OperatorAggregate> {
        let i = *self.index.get(name)?;
        self.entries.get_mut(i)
    }

    /// Aggregates in catalog (first-seen) order
    pub fn iter(&self) -> impl Iterator<Item = &OperatorAggregate> {
        self.entries.iter()
    }

    pub fn operator_names(&self) -> Vec<String> {
        self.entries.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all operators' total durations
    pub fn grand_total_micros(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.total_micros))
    }

    /// Number of matched pairs across all operators
    pub fn matched_pairs(&self) -> usize {
        self.entries.iter().map(|a| a.count).sum()
    }
}

/// Accumulate matched pairs for every cataloged operator
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `events` - The event stream, in source order (never mutated)
/// * `catalog` - Operators to track
/// * `matcher` - Strategy deciding which End closes a Begin
///
/// # Returns
/// A fresh table; nothing is carried over between calls
pub fn aggregate_pairs(
    events: &[TraceEvent],
    catalog: &OperatorCatalog,
    matcher: &dyn PairMatcher,
) -> AggregateTable {
    let mut table = AggregateTable::from_catalog(catalog);

    for (i, event) in events.iter().enumerate() {
        if !event.is_begin() || !catalog.contains(&event.name) {
            continue;
        }

        let Some(end) = matcher.match_end(events, i) else {
            continue;
        };
        let Some(end_event) = events.get(end) else {
            continue;
        };

        if end_event.timestamp < event.timestamp {
            debug!(
                "End of '{}' at position {} precedes its begin; counting zero duration",
                event.name, end
            );
        }
        let duration = end_event.timestamp.saturating_sub(event.timestamp);

        if let Some(aggregate) = table.get_mut(&event.name) {
            aggregate.record(duration);
        }
    }

    debug!(
        "Matched {} pairs across {} operators",
        table.matched_pairs(),
        table.len()
    );

    table
}
