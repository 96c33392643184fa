//! Global operator summary ranked by cumulative time.

use crate::aggregator::{AggregateTable, OperatorAggregate};
use crate::utils::error::AnalysisError;
use log::debug;
use serde::Serialize;

/// One operator's line in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub count: usize,
    pub total_micros: u64,
    pub min_micros: u64,
    pub max_micros: u64,
    pub average_micros: f64,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Summary of all operators with at least one matched pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Sorted by descending total; equal totals keep catalog order
    pub rows: Vec<SummaryRow>,
    pub grand_total_micros: u64,
}

/// Build the global summary
///
/// **Public** - main entry point for summary mode
///
/// # Errors
/// * `AnalysisError::EmptyAggregate` - grand total is zero, so no
///   percentage can be computed
pub fn build_summary(table: &AggregateTable) -> Result<SummaryReport, AnalysisError> {
    let grand_total_micros = table.grand_total_micros();
    if grand_total_micros == 0 {
        return Err(AnalysisError::EmptyAggregate);
    }

    let mut rows: Vec<SummaryRow> = table
        .iter()
        .filter_map(|aggregate| {
            let row = summary_row(aggregate, grand_total_micros);
            if row.is_none() {
                debug!("Operator '{}' has no matched pairs; omitted", aggregate.name());
            }
            row
        })
        .collect();

    // Stable sort: ties stay in catalog order
    rows.sort_by(|a, b| b.total_micros.cmp(&a.total_micros));

    Ok(SummaryReport {
        rows,
        grand_total_micros,
    })
}

/// Derive min/max/average/percentage for one operator
///
/// **Private** - `None` when the operator has no pairs
fn summary_row(aggregate: &OperatorAggregate, grand_total: u64) -> Option<SummaryRow> {
    Some(SummaryRow {
        name: aggregate.name().to_string(),
        count: aggregate.count(),
        total_micros: aggregate.total_micros(),
        min_micros: aggregate.min_micros()?,
        max_micros: aggregate.max_micros()?,
        average_micros: aggregate.average_micros()?,
        percentage: 100.0 * aggregate.total_micros() as f64 / grand_total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{aggregate_pairs, AdjacentMatcher, OperatorCatalog};
    use crate::parser::{Phase, TraceEvent};

    fn table(spans: &[(&str, u64, u64)]) -> AggregateTable {
        let events: Vec<TraceEvent> = spans
            .iter()
            .flat_map(|&(name, start, end)| {
                [
                    TraceEvent::new(name, "operator", Phase::Begin, start),
                    TraceEvent::new(name, "operator", Phase::End, end),
                ]
            })
            .collect();
        let catalog = OperatorCatalog::from_events(&events);
        aggregate_pairs(&events, &catalog, &AdjacentMatcher)
    }

    #[test]
    fn test_sorted_by_total_descending() {
        let report = build_summary(&table(&[("small", 0, 5), ("big", 5, 105), ("mid", 105, 125)])).unwrap();
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["big", "mid", "small"]);
        assert_eq!(report.grand_total_micros, 125);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let report = build_summary(&table(&[("b", 0, 10), ("a", 10, 20), ("c", 20, 30)])).unwrap();
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_row_statistics() {
        let report = build_summary(&table(&[("a", 0, 10), ("a", 10, 40)])).unwrap();
        let row = &report.rows[0];
        assert_eq!(row.count, 2);
        assert_eq!(row.min_micros, 10);
        assert_eq!(row.max_micros, 30);
        assert_eq!(row.average_micros, 20.0);
        assert_eq!(row.percentage, 100.0);
    }

    #[test]
    fn test_empty_table_fails() {
        assert_eq!(build_summary(&AggregateTable::default()), Err(AnalysisError::EmptyAggregate));
    }

    #[test]
    fn test_zero_length_pairs_only_fails() {
        assert_eq!(build_summary(&table(&[("a", 5, 5)])), Err(AnalysisError::EmptyAggregate));
    }
}
