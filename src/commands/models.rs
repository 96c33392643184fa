use crate::aggregator::MatcherKind;
use crate::output::OutputFormat;
use crate::utils::config::{DEFAULT_OPERATOR, DEFAULT_TRACE_FILE};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Trace file to analyze
    pub trace_file: PathBuf,

    /// Layered-iteration mode instead of the global summary
    pub layered: bool,

    /// Number of iterations the workload ran (layered mode only)
    pub iterations: i64,

    /// Operator to break down in layered mode
    pub operator: String,

    /// Console output format
    pub format: OutputFormat,

    /// Begin/end pair matching strategy
    pub matcher: MatcherKind,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace_file: PathBuf::from(DEFAULT_TRACE_FILE),
            layered: false,
            iterations: 0,
            operator: DEFAULT_OPERATOR.to_string(),
            format: OutputFormat::default(),
            matcher: MatcherKind::default(),
        }
    }
}

/// What the analyze command printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// Global summary table
    Summary,
    /// Layered breakdown of the requested operator
    Layered,
    /// Requested operator was not found; only the alternatives were reported
    UnknownOperator { known: Vec<String> },
}
