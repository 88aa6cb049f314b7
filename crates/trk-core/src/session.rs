//! Session reconstruction from start/stop events.
//!
//! # Algorithm
//!
//! Events are processed in file order (never re-sorted). Events outside the
//! window are skipped. Each start is queued under its [`ProjectKey`]; each
//! stop closes the *oldest* queued start for its key (FIFO), producing a
//! [`Session`]. Stops with nothing queued and starts left queued at the end
//! are dropped without producing anything.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use crate::event::{Action, Event};
use crate::key::ProjectKey;
use crate::period::Window;

/// A completed work interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub key: ProjectKey,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    /// Tags from the start event; stop-event tags are ignored.
    pub tags: Vec<String>,
}

impl Session {
    /// `end - start`. Negative only when the log is out of order for this key.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// A start waiting for its stop.
#[derive(Debug)]
struct PendingStart {
    at: DateTime<Tz>,
    tags: Vec<String>,
}

/// Pairs starts with stops inside `window`.
///
/// Sessions are returned in the order their stops occur.
pub fn reconstruct<'a, I>(events: I, window: &Window) -> Vec<Session>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut pending: HashMap<ProjectKey, VecDeque<PendingStart>> = HashMap::new();
    let mut sessions = Vec::new();

    for event in events {
        if !window.contains(&event.timestamp) {
            continue;
        }

        match &event.action {
            Action::Start => {
                pending
                    .entry(event.key.clone())
                    .or_default()
                    .push_back(PendingStart {
                        at: event.timestamp,
                        tags: event.tags.clone(),
                    });
            }
            Action::Stop => {
                let Some(start) = pending.get_mut(&event.key).and_then(VecDeque::pop_front)
                else {
                    tracing::trace!(key = %event.key, at = %event.timestamp, "dropping unmatched stop");
                    continue;
                };
                sessions.push(Session {
                    key: event.key.clone(),
                    start: start.at,
                    end: event.timestamp,
                    tags: start.tags,
                });
            }
            Action::Unrecognized(action) => {
                tracing::trace!(%action, key = %event.key, "ignoring unrecognized action");
            }
        }
    }

    let unmatched: usize = pending.values().map(VecDeque::len).sum();
    if unmatched > 0 {
        tracing::debug!(unmatched, "dropping starts without a stop");
    }

    sessions
}
