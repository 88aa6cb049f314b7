//! Reading the append-only event log.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::civil::CivilZone;
use crate::error::{Error, Result};
use crate::event::{Discard, Event};

/// Parses every line of `reader` in order, skipping lines that are not events.
///
/// Lines that are not valid UTF-8 are skipped like any other malformed line;
/// only genuine read failures are returned.
pub fn read_events<R: BufRead>(mut reader: R, zone: &CivilZone) -> std::io::Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut buf = Vec::new();
    let mut number = 0_usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let parsed = std::str::from_utf8(&buf)
            .map_err(|_| Discard::InvalidUtf8)
            .and_then(|line| Event::try_parse(line, zone));
        match parsed {
            Ok(event) => events.push(event),
            Err(reason) => {
                tracing::trace!(line = number, ?reason, "skipping malformed log line");
            }
        }
    }
    Ok(events)
}

/// A start/stop log on disk.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all events. A missing file is [`Error::LogNotFound`].
    pub fn read(&self, zone: &CivilZone) -> Result<Vec<Event>> {
        let file = File::open(&self.path).map_err(|source| self.io_error(source))?;
        let events = read_events(BufReader::new(file), zone).map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), count = events.len(), "read event log");
        Ok(events)
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::LogNotFound {
                path: self.path.clone(),
            }
        } else {
            Error::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}
