//! Summary command: time per category and project for a period.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use trk_core::Period;
use trk_core::report::{format_report, format_report_json};

use crate::{Config, SummaryArgs};

/// Runs the summary command.
///
/// An invalid period, a missing log and an empty period each print a message
/// and succeed.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &SummaryArgs) -> Result<()> {
    let Ok(period) = args.period.parse::<Period>() else {
        writeln!(writer, "Invalid period: {}", args.period)?;
        writeln!(writer, "Valid periods: {}", Period::valid_values())?;
        return Ok(());
    };

    let now = match &args.at {
        Some(at) => DateTime::parse_from_rfc3339(at)
            .context("invalid --at timestamp, expected ISO 8601 (e.g., 2024-01-15T10:30:00Z)")?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let sheet = config.timesheet().context("invalid configuration")?;
    let report = match sheet.summarize(period, now, args.tags) {
        Ok(report) => report,
        Err(trk_core::Error::LogNotFound { path }) => {
            tracing::debug!(path = %path.display(), "log file missing");
            writeln!(writer, "No log file found at {}.", path.display())?;
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to summarize log"),
    };

    if args.json {
        writeln!(writer, "{}", format_report_json(&report)?)?;
    } else {
        write!(writer, "{}", format_report(&report))?;
    }

    Ok(())
}
