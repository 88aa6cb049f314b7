//! Reporting periods and their time windows.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

use crate::civil::CivilZone;
use crate::error::Error;

/// A reporting period, always the one containing "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Capitalized name used in report headers ("Day", "Week", ...).
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// Comma-separated list of valid keywords, for error messages.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Computes the half-open window for this period around `now`.
    pub fn window(self, now: DateTime<Tz>, zone: &CivilZone) -> Window {
        let today = now.date_naive();
        let (first, next) = match self {
            Self::Day => (today, today + Days::new(1)),
            Self::Week => {
                let monday =
                    today - Days::new(u64::from(today.weekday().num_days_from_monday()));
                (monday, monday + Days::new(7))
            }
            Self::Month => {
                let first = today.with_day(1).unwrap_or(today);
                (first, first + Months::new(1))
            }
            Self::Year => {
                let first = NaiveDate::from_yo_opt(today.year(), 1).unwrap_or(today);
                (first, first + Months::new(12))
            }
        };

        Window {
            start: zone.midnight(first),
            end: zone.midnight(next),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidPeriod {
                value: s.to_string(),
            })
    }
}

/// A half-open `[start, end)` range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl Window {
    /// Start inclusive, end exclusive.
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.start && *instant < self.end
    }
}
