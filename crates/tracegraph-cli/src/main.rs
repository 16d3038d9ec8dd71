//! tracegraph CLI
//!
//! Command-line interface for the trace viewer's layout and diff engines

use clap::{Parser, Subcommand, ValueEnum};
use tracegraph_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tracegraph")]
#[command(about = "tracegraph - request-graph layout and message diffs", long_about = None)]
struct Cli {
    /// Enable logging to stderr with the given profile
    #[arg(long, global = true, value_enum)]
    log: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lay out a forest of nodes as git-log style lanes
    Layout(commands::layout::LayoutArgs),
    /// Diff a recorded request's messages against the previous request
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Layout(args) => commands::layout::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
