use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trk_cli::commands::{summary, tags};
use trk_cli::{Cli, Commands, Config, SummaryArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so the report on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Summary(args)) => summary::run(&mut stdout, &config, args)?,
        Some(Commands::Tags { json }) => tags::run(&mut stdout, &config, *json)?,
        None => summary::run(&mut stdout, &config, &SummaryArgs::default())?,
    }

    Ok(())
}
