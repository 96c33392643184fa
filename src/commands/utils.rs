use super::analyze::load_aggregates;
use crate::aggregator::MatcherKind;
use crate::output::render_operator_list;
use anyhow::Result;
use std::path::Path;

/// List cataloged operators and their matched pair counts
pub fn list_operators(trace_file: &Path, matcher: MatcherKind) -> Result<()> {
    let table = load_aggregates(trace_file, matcher)?;

    if table.is_empty() {
        println!("No operator events in {}", trace_file.display());
        return Ok(());
    }

    println!("{}", render_operator_list(&table));
    println!();
    println!(
        "{} operators, {} matched pairs",
        table.len(),
        table.matched_pairs()
    );

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Op Trace Stats v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Operator-level timing statistics from trace-event profiles.");
}
