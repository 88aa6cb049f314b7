//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Time summaries from a start/stop log.
///
/// Reads `<timestamp> <start|stop> <category> <project> [tag]...` lines and
/// reports how much time went where.
#[derive(Debug, Parser)]
#[command(name = "trk", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize tracked time for the current day, week, month or year.
    Summary(SummaryArgs),

    /// List the tags used on each project across the whole log.
    Tags {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Period to summarize: day, week, month or year.
    #[arg(default_value = "day")]
    pub period: String,

    /// Break each project down by tag set.
    #[arg(long)]
    pub tags: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Reference time instead of now (ISO 8601, e.g. 2024-01-15T10:30:00Z).
    #[arg(long)]
    pub at: Option<String>,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            period: "day".to_string(),
            tags: false,
            json: false,
            at: None,
        }
    }
}
