//! Per-layer timings of one operator across repeated iterations.
//!
//! Durations were appended in stream order, which for a workload run
//! `iterations` times reads: layer 0..L of iteration 0, then layer 0..L of
//! iteration 1, and so on. Layer `i` of iteration `k` therefore sits at
//! `durations[i + k * L]`.

use crate::aggregator::AggregateTable;
use crate::utils::config::WARMUP_ITERATIONS;
use crate::utils::error::AnalysisError;
use log::debug;
use serde::Serialize;

/// Timings of one layer across iterations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerTiming {
    pub layer: usize,
    pub first_micros: u64,
    pub second_micros: u64,
    pub third_micros: u64,
    /// Mean over iterations 4..N; `None` when only three iterations ran
    pub rest_average_micros: Option<f64>,
}

/// Layered breakdown of a single operator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayeredBreakdown {
    pub operator: String,
    pub iterations: usize,
    pub layer_count: usize,
    pub layers: Vec<LayerTiming>,
    pub total_micros: u64,
    pub average_micros: f64,
}

/// Check the iteration count before any trace work is done
///
/// **Public** - shared by argument validation and `build_layered_breakdown`
pub fn validate_iterations(iterations: i64) -> Result<usize, AnalysisError> {
    if iterations <= 0 {
        return Err(AnalysisError::InvalidIterationCount(iterations));
    }
    usize::try_from(iterations).map_err(|_| AnalysisError::InvalidIterationCount(iterations))
}

/// Split one operator's durations into layers across iterations
///
/// **Public** - main entry point for layered mode
///
/// # Arguments
/// * `table` - Aggregates from `aggregate_pairs`
/// * `operator` - Operator to break down
/// * `iterations` - Number of times the workload was executed
///
/// # Errors
/// * `InvalidIterationCount` - `iterations <= 0`
/// * `UnknownOperator` - `operator` is not in the table
/// * `InsufficientSamples` - fewer than 3 pairs, or fewer than 3 iterations
/// * `UnevenLayering` - pair count not divisible by `iterations`
pub fn build_layered_breakdown(
    table: &AggregateTable,
    operator: &str,
    iterations: i64,
) -> Result<LayeredBreakdown, AnalysisError> {
    let iterations = validate_iterations(iterations)?;

    let aggregate = table
        .get(operator)
        .ok_or_else(|| AnalysisError::UnknownOperator {
            name: operator.to_string(),
            known: table.operator_names(),
        })?;

    let pairs = aggregate.count();
    let insufficient = || AnalysisError::InsufficientSamples {
        operator: operator.to_string(),
        pairs,
        iterations,
    };

    if pairs < WARMUP_ITERATIONS {
        return Err(insufficient());
    }

    if pairs % iterations != 0 {
        return Err(AnalysisError::UnevenLayering {
            operator: operator.to_string(),
            pairs,
            iterations,
        });
    }

    // Strided reads below need three full iterations
    if iterations < WARMUP_ITERATIONS {
        return Err(insufficient());
    }

    let layer_count = pairs / iterations;
    let durations = aggregate.durations();

    debug!(
        "Breaking down '{}': {} pairs, {} iterations, {} layers",
        operator, pairs, iterations, layer_count
    );

    let layers = (0..layer_count)
        .map(|layer| {
            let at = |iteration| iteration_value(durations, layer, layer_count, iteration);
            Some(LayerTiming {
                layer,
                first_micros: at(0)?,
                second_micros: at(1)?,
                third_micros: at(2)?,
                rest_average_micros: strided_mean(
                    durations,
                    layer + WARMUP_ITERATIONS * layer_count,
                    layer_count,
                ),
            })
        })
        .collect::<Option<Vec<_>>>()
        .ok_or_else(insufficient)?;

    Ok(LayeredBreakdown {
        operator: operator.to_string(),
        iterations,
        layer_count,
        layers,
        total_micros: aggregate.total_micros(),
        average_micros: aggregate.total_micros() as f64 / pairs as f64,
    })
}

/// Duration of `layer` in the given iteration, if recorded
///
/// **Private** - strided lookup into the flat duration list
fn iteration_value(
    durations: &[u64],
    layer: usize,
    layer_count: usize,
    iteration: usize,
) -> Option<u64> {
    durations.get(layer + iteration * layer_count).copied()
}

/// Mean of `values[start]`, `values[start + step]`, ...
///
/// **Private** - `None` when `start` is past the end
fn strided_mean(values: &[u64], start: usize, step: usize) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .skip(start)
        .step_by(step.max(1))
        .fold((0u64, 0usize), |(sum, n), &v| (sum.saturating_add(v), n + 1));

    if n == 0 {
        None
    } else {
        Some(sum as f64 / n as f64)
    }
}
