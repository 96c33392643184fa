//! Op Trace Stats CLI
//!
//! Summarizes operator timings from a trace-event profile, or breaks one
//! operator down per layer across iterations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use op_trace_stats::aggregator::MatcherKind;
use op_trace_stats::commands::{
    display_version, execute_analyze, list_operators, validate_args, AnalyzeArgs,
};
use op_trace_stats::output::OutputFormat;
use op_trace_stats::utils::config::{DEFAULT_OPERATOR, DEFAULT_TRACE_FILE};

/// Op Trace Stats - operator timing statistics from trace profiles
#[derive(Parser, Debug)]
#[command(name = "op-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print operator statistics from a trace file
    Analyze {
        /// Profile JSON file
        #[arg(short, long, env = "OP_TRACE_FILE", default_value = DEFAULT_TRACE_FILE)]
        file: PathBuf,

        /// Dump per-layer statistics along the iteration perspective
        #[arg(long)]
        full: bool,

        /// Number of iterations in the trace (required with --full)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        iteration: i64,

        /// Operator to dump with --full
        #[arg(long, env = "OP_TRACE_OPERATOR", default_value = DEFAULT_OPERATOR)]
        op: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Begin/end pairing strategy
        #[arg(long, value_enum, default_value_t = MatcherKind::Adjacent)]
        matcher: MatcherKind,
    },

    /// List operators found in a trace file
    Operators {
        /// Profile JSON file
        #[arg(short, long, env = "OP_TRACE_FILE", default_value = DEFAULT_TRACE_FILE)]
        file: PathBuf,

        /// Begin/end pairing strategy
        #[arg(long, value_enum, default_value_t = MatcherKind::Adjacent)]
        matcher: MatcherKind,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            full,
            iteration,
            op,
            format,
            matcher,
        } => {
            let args = AnalyzeArgs {
                trace_file: file,
                layered: full,
                iterations: iteration,
                operator: op,
                format,
                matcher,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(&args)?;
        }

        Commands::Operators { file, matcher } => {
            list_operators(&file, matcher)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
