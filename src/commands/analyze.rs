//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the trace event stream
//! 2. Catalogs operators
//! 3. Aggregates matched begin/end pairs
//! 4. Builds the summary or layered report
//! 5. Prints it to stdout

use super::models::{AnalyzeArgs, AnalyzeOutcome};
use crate::aggregator::{aggregate_pairs, AggregateTable, MatcherKind, OperatorCatalog};
use crate::output::{render_layered, render_summary};
use crate::parser::read_trace_file;
use crate::report::{build_layered_breakdown, build_summary, validate_iterations};
use crate::utils::error::AnalysisError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Which report was printed. An unknown operator in layered mode is
/// reported on stderr and returned as `AnalyzeOutcome::UnknownOperator`
/// rather than as an error.
///
/// # Errors
/// * Trace loading failures
/// * Any other failed report precondition
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let start_time = Instant::now();

    info!("Analyzing trace: {}", args.trace_file.display());

    let table = load_aggregates(&args.trace_file, args.matcher)?;

    let outcome = if args.layered {
        info!(
            "Building layered breakdown of '{}' over {} iterations",
            args.operator, args.iterations
        );
        match build_layered_breakdown(&table, &args.operator, args.iterations) {
            Ok(breakdown) => {
                println!("{}", render_layered(&breakdown, args.format)?);
                AnalyzeOutcome::Layered
            }
            Err(err) => {
                if let AnalysisError::UnknownOperator { known, .. } = &err {
                    eprintln!("ERROR: {}", err);
                    AnalyzeOutcome::UnknownOperator {
                        known: known.clone(),
                    }
                } else {
                    return Err(err).context(format!("Cannot break down '{}'", args.operator));
                }
            }
        }
    } else {
        info!("Building operator summary");
        let summary = build_summary(&table).context("Cannot summarize operators")?;
        println!("{}", render_summary(&summary, args.format)?);
        AnalyzeOutcome::Summary
    };

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(outcome)
}

/// Load a trace file and aggregate its operator pairs
///
/// **Public** - shared by `analyze` and `operators`
pub fn load_aggregates(trace_file: &Path, matcher: MatcherKind) -> Result<AggregateTable> {
    let events = read_trace_file(trace_file)
        .with_context(|| format!("Failed to load trace {}", trace_file.display()))?;

    debug!("Loaded {} trace events", events.len());

    let catalog = OperatorCatalog::from_events(&events);
    let table = aggregate_pairs(&events, &catalog, matcher.matcher().as_ref());

    info!(
        "Found {} operators with {} matched pairs",
        table.len(),
        table.matched_pairs()
    );

    Ok(table)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// The iteration count is checked here so a bad value fails before the
/// trace is read.
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.trace_file.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    if args.layered {
        validate_iterations(args.iterations)?;

        if args.operator.trim().is_empty() {
            anyhow::bail!("Operator name cannot be empty in layered mode");
        }
    }

    Ok(())
}
