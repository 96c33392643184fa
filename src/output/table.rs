//! Fixed-width text tables for the terminal.

use crate::aggregator::AggregateTable;
use crate::report::{LayeredBreakdown, SummaryReport};
use crate::utils::config::micros_to_millis;

const NAME_WIDTH: usize = 38;
const COLUMN_WIDTH: usize = 16;

/// Render the global summary table
///
/// **Public** - text formatter for summary mode
pub fn render_summary_table(report: &SummaryReport) -> String {
    let mut lines = title("operator");

    lines.push(header(&[
        "Name",
        "Total Count",
        "Time (ms)",
        "Min Time (ms)",
        "Max Time (ms)",
        "Avg Time (ms)",
        "Percentage",
    ]));

    for row in &report.rows {
        lines.push(format!(
            "{:<nw$} {:>cw$} {:>cw$.3} {:>cw$.3} {:>cw$.3} {:>cw$.3} {:>pw$.2}%",
            row.name,
            row.count,
            micros_to_millis(row.total_micros as f64),
            micros_to_millis(row.min_micros as f64),
            micros_to_millis(row.max_micros as f64),
            micros_to_millis(row.average_micros),
            row.percentage,
            nw = NAME_WIDTH,
            cw = COLUMN_WIDTH,
            pw = COLUMN_WIDTH - 1,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total OP Time: {:.3} ms",
        micros_to_millis(report.grand_total_micros as f64)
    ));

    lines.join("\n")
}

/// Render the per-layer table for one operator
///
/// **Public** - text formatter for layered mode
pub fn render_layered_table(breakdown: &LayeredBreakdown) -> String {
    let mut lines = title("operator");

    lines.push(header(&[
        "Name",
        "Layer",
        "1st Time (ms)",
        "2nd Time (ms)",
        "3rd Time (ms)",
        "Rest Time (ms)",
    ]));

    for layer in &breakdown.layers {
        let rest = layer
            .rest_average_micros
            .map(|r| format!("{:.3}", micros_to_millis(r)))
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "{:<nw$} {:>cw$} {:>cw$.3} {:>cw$.3} {:>cw$.3} {:>cw$}",
            breakdown.operator,
            layer.layer,
            micros_to_millis(layer.first_micros as f64),
            micros_to_millis(layer.second_micros as f64),
            micros_to_millis(layer.third_micros as f64),
            rest,
            nw = NAME_WIDTH,
            cw = COLUMN_WIDTH,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total Time: {:.3}ms, Average Time: {:.3}ms",
        micros_to_millis(breakdown.total_micros as f64),
        micros_to_millis(breakdown.average_micros)
    ));

    lines.join("\n")
}

/// Render cataloged operators with their pair counts
///
/// **Public** - used by the `operators` command
pub fn render_operator_list(table: &AggregateTable) -> String {
    let mut lines = vec![header(&["Name", "Pairs"])];

    for aggregate in table.iter() {
        lines.push(format!(
            "{:<nw$} {:>cw$}",
            aggregate.name(),
            aggregate.count(),
            nw = NAME_WIDTH,
            cw = COLUMN_WIDTH,
        ));
    }

    lines.join("\n")
}

fn title(text: &str) -> Vec<String> {
    vec![text.to_string(), "=".repeat(20)]
}

/// Column titles plus a dashed underline of matching length
fn header(columns: &[&str]) -> String {
    let titles = align_columns(columns.iter().map(|c| c.to_string()));
    let rules = align_columns(columns.iter().map(|c| "-".repeat(c.len())));
    format!("{}\n{}", titles, rules)
}

fn align_columns(cells: impl Iterator<Item = String>) -> String {
    cells
        .enumerate()
        .map(|(i, cell)| {
            if i == 0 {
                format!("{:<w$}", cell, w = NAME_WIDTH)
            } else {
                format!("{:>w$}", cell, w = COLUMN_WIDTH)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{LayerTiming, SummaryRow};

    #[test]
    fn test_summary_table_values_in_millis() {
        let report = SummaryReport {
            rows: vec![SummaryRow {
                name: "conv".to_string(),
                count: 2,
                total_micros: 1500,
                min_micros: 500,
                max_micros: 1000,
                average_micros: 750.0,
                percentage: 100.0,
            }],
            grand_total_micros: 1500,
        };

        let text = render_summary_table(&report);
        assert!(text.contains("1.500"));
        assert!(text.contains("0.750"));
        assert!(text.contains("100.00%"));
        assert!(text.ends_with("Total OP Time: 1.500 ms"));
    }

    #[test]
    fn test_layered_table_missing_rest() {
        let breakdown = LayeredBreakdown {
            operator: "conv".to_string(),
            iterations: 3,
            layer_count: 1,
            layers: vec![LayerTiming {
                layer: 0,
                first_micros: 2000,
                second_micros: 1000,
                third_micros: 1000,
                rest_average_micros: None,
            }],
            total_micros: 4000,
            average_micros: 4000.0 / 3.0,
        };

        let text = render_layered_table(&breakdown);
        let row = text.lines().find(|l| l.starts_with("conv")).unwrap();
        assert!(row.trim_end().ends_with('-'));
        assert!(text.contains("Total Time: 4.000ms, Average Time: 1.333ms"));
    }

    #[test]
    fn test_header_underlines_each_column() {
        let text = header(&["Name", "Layer"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("----"));
        assert!(lines[1].ends_with("-----"));
    }
}
