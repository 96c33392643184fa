use op_trace_stats::aggregator::{aggregate_pairs, AdjacentMatcher, AggregateTable, OperatorCatalog};
use op_trace_stats::parser::{Phase, TraceEvent};
use op_trace_stats::report::{build_layered_breakdown, build_summary, LayerTiming};
use op_trace_stats::utils::error::AnalysisError;
use pretty_assertions::assert_eq;

/// Back-to-back begin/end pairs for one operator with the given durations
fn stream_with_durations(name: &str, durations: &[u64]) -> Vec<TraceEvent> {
    let mut ts = 0;
    let mut events = Vec::new();
    for &d in durations {
        events.push(TraceEvent::new(name, "operator", Phase::Begin, ts));
        ts += d;
        events.push(TraceEvent::new(name, "operator", Phase::End, ts));
    }
    events
}

fn aggregate(events: &[TraceEvent]) -> AggregateTable {
    let catalog = OperatorCatalog::from_events(events);
    aggregate_pairs(events, &catalog, &AdjacentMatcher)
}

#[test]
fn test_layered_breakdown_four_iterations_two_layers() {
    let table = aggregate(&stream_with_durations("conv", &[10, 20, 30, 40, 50, 60, 70, 80]));

    let breakdown = build_layered_breakdown(&table, "conv", 4).unwrap();

    assert_eq!(breakdown.layer_count, 2);
    assert_eq!(
        breakdown.layers,
        vec![
            LayerTiming {
                layer: 0,
                first_micros: 10,
                second_micros: 30,
                third_micros: 50,
                rest_average_micros: Some(70.0),
            },
            LayerTiming {
                layer: 1,
                first_micros: 20,
                second_micros: 40,
                third_micros: 60,
                rest_average_micros: Some(80.0),
            },
        ]
    );
    assert_eq!(breakdown.total_micros, 360);
    assert_eq!(breakdown.average_micros, 45.0);
}

#[test]
fn test_rest_average_spans_all_later_iterations() {
    // 6 iterations, 1 layer
    let table = aggregate(&stream_with_durations("conv", &[100, 50, 40, 10, 20, 30]));

    let breakdown = build_layered_breakdown(&table, "conv", 6).unwrap();

    assert_eq!(breakdown.layers.len(), 1);
    assert_eq!(breakdown.layers[0].rest_average_micros, Some(20.0));
}

#[test]
fn test_exactly_three_iterations_has_no_rest() {
    let table = aggregate(&stream_with_durations("conv", &[1, 2, 3, 4, 5, 6]));

    let breakdown = build_layered_breakdown(&table, "conv", 3).unwrap();

    assert_eq!(breakdown.layer_count, 2);
    assert!(breakdown.layers.iter().all(|l| l.rest_average_micros.is_none()));
    assert_eq!(breakdown.layers[1].third_micros, 6);
}

#[test]
fn test_invalid_iteration_count() {
    let table = aggregate(&stream_with_durations("conv", &[1, 2, 3, 4]));

    assert_eq!(
        build_layered_breakdown(&table, "conv", 0),
        Err(AnalysisError::InvalidIterationCount(0))
    );
    assert_eq!(
        build_layered_breakdown(&table, "conv", -2),
        Err(AnalysisError::InvalidIterationCount(-2))
    );
}

#[test]
fn test_uneven_layering() {
    let table = aggregate(&stream_with_durations("conv", &[1, 2, 3, 4, 5, 6, 7]));

    assert_eq!(
        build_layered_breakdown(&table, "conv", 4),
        Err(AnalysisError::UnevenLayering {
            operator: "conv".to_string(),
            pairs: 7,
            iterations: 4,
        })
    );
}

#[test]
fn test_insufficient_samples() {
    let table = aggregate(&stream_with_durations("conv", &[1, 2]));

    assert!(matches!(
        build_layered_breakdown(&table, "conv", 2),
        Err(AnalysisError::InsufficientSamples { pairs: 2, .. })
    ));
}

#[test]
fn test_fewer_than_three_iterations_is_insufficient() {
    let table = aggregate(&stream_with_durations("conv", &[1, 2, 3, 4]));

    assert!(matches!(
        build_layered_breakdown(&table, "conv", 2),
        Err(AnalysisError::InsufficientSamples { iterations: 2, .. })
    ));
}

#[test]
fn test_unknown_operator_lists_alternatives() {
    let mut events = stream_with_durations("relu", &[1, 2, 3]);
    events.extend(stream_with_durations("pool", &[4]));
    let table = aggregate(&events);

    let err = build_layered_breakdown(&table, "conv", 3).unwrap_err();

    assert_eq!(
        err,
        AnalysisError::UnknownOperator {
            name: "conv".to_string(),
            known: vec!["relu".to_string(), "pool".to_string()],
        }
    );
    assert!(err.to_string().contains("relu, pool"));
}

#[test]
fn test_summary_end_to_end() {
    let events = vec![
        TraceEvent::new("conv", "operator", Phase::Begin, 0),
        TraceEvent::new("conv", "operator", Phase::End, 1000),
        TraceEvent::new("relu", "operator", Phase::Begin, 1000),
        TraceEvent::new("relu", "operator", Phase::End, 1200),
    ];

    let summary = build_summary(&aggregate(&events)).unwrap();

    assert_eq!(summary.rows[0].name, "conv");
    assert_eq!(summary.rows[1].name, "relu");
    assert_eq!(format!("{:.2}", summary.rows[0].percentage), "83.33");
    assert_eq!(format!("{:.2}", summary.rows[1].percentage), "16.67");
    assert_eq!(summary.grand_total_micros, 1200);
}

#[test]
fn test_summary_ordering_and_percentages() {
    let mut events = stream_with_durations("a", &[5, 5]);
    events.extend(stream_with_durations("b", &[70]));
    events.extend(stream_with_durations("c", &[3, 3, 3, 3]));
    events.extend(stream_with_durations("d", &[12]));

    let summary = build_summary(&aggregate(&events)).unwrap();

    for pair in summary.rows.windows(2) {
        assert!(pair[0].total_micros >= pair[1].total_micros);
    }
    let total: f64 = summary.rows.iter().map(|r| r.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_summary_without_pairs_fails() {
    let events = vec![TraceEvent::new("conv", "operator", Phase::Begin, 0)];

    assert_eq!(
        build_summary(&aggregate(&events)),
        Err(AnalysisError::EmptyAggregate)
    );
}
