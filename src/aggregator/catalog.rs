//! Distinct operator names found in a trace.

use crate::parser::TraceEvent;
use crate::utils::config::{OPERATOR_CATEGORY, PROCESS_NAME_EVENT};
use log::debug;
use std::collections::HashSet;

/// Ordered set of operator names, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorCatalog {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl OperatorCatalog {
    /// Scan the stream once and collect every operator name
    ///
    /// **Public** - main entry point for cataloging
    ///
    /// An event names an operator when its category is `operator` and its
    /// name is not the `process_name` metadata record.
    pub fn from_events(events: &[TraceEvent]) -> Self {
        let mut catalog = Self::default();

        for event in events.iter().filter(|e| is_operator_event(e)) {
            catalog.insert(&event.name);
        }

        debug!("Cataloged {} operators from {} events", catalog.len(), events.len());

        catalog
    }

    fn insert(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Names in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn is_operator_event(event: &TraceEvent) -> bool {
    event.category == OPERATOR_CATEGORY && event.name != PROCESS_NAME_EVENT
}
