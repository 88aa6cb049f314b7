//! Tags command: tags used per project across the whole log.

use std::io::Write;

use anyhow::{Context, Result};
use trk_core::report::{format_tag_index, format_tag_index_json};

use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let sheet = config.timesheet().context("invalid configuration")?;
    let index = match sheet.tag_index() {
        Ok(index) => index,
        Err(trk_core::Error::LogNotFound { path }) => {
            writeln!(writer, "No log file found at {}.", path.display())?;
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to read log"),
    };

    if json {
        writeln!(writer, "{}", format_tag_index_json(&index)?)?;
    } else {
        write!(writer, "{}", format_tag_index(&index))?;
    }

    Ok(())
}
