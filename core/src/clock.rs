//! Reference clock: turns a calendar date and a wall-clock time into a
//! zoned timestamp in the run's reference time zone.

use crate::error::{GenError, GenResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

pub type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceClock {
    zone: Tz,
}

impl ReferenceClock {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Resolve `date time` in the reference zone. The offset in effect on
    /// that date is embedded in the result (no UTC normalization).
    /// Ambiguous times resolve to the earlier instant; times inside a DST gap fail.
    pub fn at(&self, date: NaiveDate, time: NaiveTime) -> GenResult<Timestamp> {
        self.zone
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| GenError::NonexistentLocalTime {
                date,
                time,
                zone: self.zone.name().to_string(),
            })
    }

    pub fn at_hm(&self, date: NaiveDate, hour: u32, minute: u32) -> GenResult<Timestamp> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            GenError::invalid_config(format!("{hour:02}:{minute:02} is not a valid clock time"))
        })?;
        self.at(date, time)
    }
}
