//! Log events and the line parser.
//!
//! A log line is whitespace-separated:
//! `<timestamp> <start|stop> <category> <project> [tag]...`

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::civil::CivilZone;
use crate::key::ProjectKey;

/// What an event marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    /// Any other action word. Never paired; discarded by the parser.
    Unrecognized(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "start" => Self::Start,
            "stop" => Self::Stop,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

/// One parsed log entry, with its timestamp in the civil zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: DateTime<Tz>,
    pub action: Action,
    pub key: ProjectKey,
    /// Tags in file order. Only meaningful on start events.
    pub tags: Vec<String>,
}

/// Why a line was not turned into an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    InvalidUtf8,
    TooFewFields,
    BadTimestamp,
    UnknownAction,
}

impl Event {
    /// Parses a log line, or returns `None` if it is not a valid event.
    pub fn parse(line: &str, zone: &CivilZone) -> Option<Self> {
        Self::try_parse(line, zone).ok()
    }

    /// Like [`Event::parse`], but reports why the line was discarded.
    pub fn try_parse(line: &str, zone: &CivilZone) -> Result<Self, Discard> {
        let mut fields = line.split_whitespace();
        let (Some(timestamp), Some(action), Some(category), Some(project)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(Discard::TooFewFields);
        };

        let timestamp = parse_timestamp(timestamp).ok_or(Discard::BadTimestamp)?;

        let action = match action.parse::<Action>() {
            Ok(Action::Unrecognized(_)) => return Err(Discard::UnknownAction),
            Ok(action) => action,
            Err(never) => match never {},
        };

        Ok(Self {
            timestamp: zone.localize(timestamp),
            action,
            key: ProjectKey::new(category, project),
            tags: fields.map(str::to_string).collect(),
        })
    }
}

/// Parses an ISO 8601 instant. A trailing `Z` means UTC; a missing offset is
/// taken as UTC too, since the log is written in UTC.
///
/// Accepts RFC 3339, minute precision (`2024-01-01T14:00Z`,
/// `2024-01-01T14:00+02:00`, `2024-01-01T14:00`) and bare dates, which mean
/// midnight UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset = s
        .strip_suffix('Z')
        .map_or_else(|| s.to_string(), |rest| format!("{rest}+00:00"));
    if let Ok(dt) = DateTime::parse_from_str(&offset, "%Y-%m-%dT%H:%M%#z") {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
