//! Civil (wall-clock) time in a fixed IANA timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::Error;

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// A timezone in which period boundaries are computed and events are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilZone {
    tz: Tz,
}

impl CivilZone {
    /// Looks up a zone by IANA identifier (e.g. `America/New_York`).
    pub fn new(name: &str) -> Result<Self, Error> {
        name.parse::<Tz>()
            .map(|tz| Self { tz })
            .map_err(|_| Error::UnknownTimezone {
                value: name.to_string(),
            })
    }

    /// The IANA identifier of this zone.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Converts a UTC instant to wall-clock time in this zone.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// The current instant in this zone.
    pub fn now(&self) -> DateTime<Tz> {
        self.localize(Utc::now())
    }

    /// The first instant of `date` in this zone.
    ///
    /// Ambiguous midnights (DST fall-back) resolve to the earlier instant.
    /// A midnight skipped by a DST gap resolves to 01:00 local, which exists
    /// in every zone that shifts at midnight.
    pub fn midnight(&self, date: NaiveDate) -> DateTime<Tz> {
        match self.tz.from_local_datetime(&date.and_time(NaiveTime::MIN)) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                let one_am = date.and_hms_opt(1, 0, 0).unwrap_or_default();
                self.tz
                    .from_local_datetime(&one_am)
                    .earliest()
                    .unwrap_or_else(|| self.tz.from_utc_datetime(&one_am))
            }
        }
    }
}

impl Default for CivilZone {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::New_York,
        }
    }
}

impl FromStr for CivilZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CivilZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
