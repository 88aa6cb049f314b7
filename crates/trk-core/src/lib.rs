//! Core logic for summarizing a start/stop time log.
//!
//! This crate contains:
//! - Parsing: turning log lines into [`Event`]s
//! - Periods: civil-time windows for day, week, month and year
//! - Sessions: FIFO pairing of starts and stops per category and project
//! - Summaries: per-project and per-tag-set totals, and their rendering

pub mod civil;
mod error;
pub mod event;
pub mod key;
pub mod log;
pub mod period;
pub mod report;
pub mod session;
pub mod summary;
pub mod tags;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

pub use civil::{CivilZone, DEFAULT_TIMEZONE};
pub use error::{Error, Result};
pub use event::{Action, Event};
pub use key::{ProjectKey, TagSet};
pub use log::EventLog;
pub use period::{Period, Window};
pub use report::Report;
pub use session::{Session, reconstruct};
pub use summary::{ProjectTotal, Summary, TagTotal};
pub use tags::TagIndex;

/// A time log plus the zone its periods are computed in.
#[derive(Debug, Clone)]
pub struct Timesheet {
    log: EventLog,
    zone: CivilZone,
}

impl Timesheet {
    pub fn new(log_path: impl Into<PathBuf>, zone: CivilZone) -> Self {
        Self {
            log: EventLog::new(log_path),
            zone,
        }
    }

    pub const fn zone(&self) -> &CivilZone {
        &self.zone
    }

    /// Summarizes the `period` that contains `now` in this sheet's zone.
    ///
    /// The log is read before the window matters, so a missing log is
    /// reported even for an empty period.
    pub fn summarize(&self, period: Period, now: DateTime<Utc>, by_tags: bool) -> Result<Report> {
        let events = self.log.read(&self.zone)?;
        let window = period.window(self.zone.localize(now), &self.zone);
        tracing::debug!(%period, start = %window.start, end = %window.end, "resolved window");

        let sessions = reconstruct(&events, &window);
        tracing::debug!(count = sessions.len(), "reconstructed sessions");

        Ok(Report {
            period,
            window,
            zone: self.zone,
            summary: Summary::from_sessions(&sessions, by_tags),
            by_tags,
        })
    }

    /// Lists start-event tags per project over the entire log.
    pub fn tag_index(&self) -> Result<TagIndex> {
        let events = self.log.read(&self.zone)?;
        Ok(TagIndex::from_events(&events))
    }
}
