//! Layout command
//!
//! Usage: tracegraph layout <FOREST_FILE> [--metrics <FILE>] [--output <FILE>]

use clap::Args;
use std::path::{Path, PathBuf};
use tracegraph_core::{LayoutMetrics, TreeNode};

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Forest file: a JSON or YAML list of nodes with nested `children`
    pub forest: PathBuf,

    /// Layout metrics file (JSON or YAML); missing keys use the defaults
    #[arg(short, long)]
    pub metrics: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute layout command
pub fn execute(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let forest: Vec<TreeNode> = read_yaml_or_json(&args.forest)?;
    let metrics = match &args.metrics {
        Some(path) => read_yaml_or_json(path)?,
        None => LayoutMetrics::default(),
    };

    let layout = tracegraph_engine::layout_forest(&forest, &metrics)?;

    let body = serde_json::to_string_pretty(&layout)?;
    super::emit(args.output.as_deref(), &body)
}

/// Parse a file as YAML, which also accepts JSON documents
fn read_yaml_or_json<T>(path: &Path) -> Result<T, Box<dyn std::error::Error>>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value = serde_yaml::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?;
    Ok(value)
}
