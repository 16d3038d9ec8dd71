//! Diff command
//!
//! Usage: tracegraph diff <TRACE_JSONL> --index <N> [--format json|text]

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracegraph_core::trace::read_trace_file;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// JSONL trace file written by the recording proxy
    pub trace: PathBuf,

    /// Zero-based record index; diffed against the record before it
    #[arg(short, long)]
    pub index: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = DiffFormat::Text)]
    pub format: DiffFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    /// Items and summary as pretty JSON
    Json,
    /// Grouped line-per-change summary
    Text,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_trace_file(&args.trace)?;
    let result = tracegraph_engine::diff_trace_record(&records, args.index)?;

    let body = match args.format {
        DiffFormat::Json => serde_json::to_string_pretty(&result)?,
        DiffFormat::Text => result.human_summary,
    };
    super::emit(args.output.as_deref(), &body)
}
