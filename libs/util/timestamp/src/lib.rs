// This file is part of Measures.
//
// Measures is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Measures is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Measures.  If not, see <http://www.gnu.org/licenses/>.
//! Points in time at nanosecond resolution, with durations measured as [`Time`] quantities.
mod error;

pub use crate::error::{Result, TimestampError};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use quantity::{Prefix, Time, TimeUnit, UnitError};
use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
    thread,
    time::Duration,
};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn round_nanoseconds(nanoseconds: f64) -> Option<i64> {
    let nanoseconds = nanoseconds.round();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&nanoseconds) {
        return None;
    }
    Some(nanoseconds as i64)
}

/// Nanoseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    nanoseconds: i64,
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl Timestamp {
    pub fn now() -> Self {
        // Saturates after the year 2262.
        Self {
            nanoseconds: Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX),
        }
    }

    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self { nanoseconds }
    }

    pub fn from_seconds(seconds: f64) -> Result<Self> {
        round_nanoseconds(seconds * 1e9)
            .map(Self::from_nanoseconds)
            .ok_or_else(|| TimestampError::OutOfRange(format!("{seconds} s")))
    }

    /// Parses RFC 3339 text; text without a UTC offset is read as UTC.
    pub fn from_iso8601_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let datetime = match DateTime::parse_from_rfc3339(text) {
            Ok(datetime) => datetime.with_timezone(&Utc),
            Err(rfc3339_err) => {
                let naive = NAIVE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                    .ok_or(rfc3339_err)?;
                Utc.from_utc_datetime(&naive)
            }
        };
        Self::from_datetime(datetime)
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Result<Self> {
        datetime
            .timestamp_nanos_opt()
            .map(Self::from_nanoseconds)
            .ok_or_else(|| TimestampError::OutOfRange(datetime.to_string()))
    }

    pub fn as_nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    pub fn as_seconds(&self) -> f64 {
        self.nanoseconds as f64 / 1e9
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.nanoseconds)
    }

    /// `self - other`, negative when `other` is later.
    pub fn difference(&self, other: &Self) -> Time {
        let delta = i128::from(self.nanoseconds) - i128::from(other.nanoseconds);
        Time::nanoseconds(delta as f64)
    }

    /// The instant `duration` after this one.
    pub fn offset(&self, duration: Time) -> Result<Self> {
        if duration.power() != 1. {
            return Err(UnitError::IncompatiblePower {
                lhs: duration.power(),
                rhs: 1.,
            }
            .into());
        }
        // Only the duration passes through f64; the sum stays exact in i64.
        round_nanoseconds(duration.get(TimeUnit::Second, Prefix::Nano))
            .and_then(|delta| self.nanoseconds.checked_add(delta))
            .map(Self::from_nanoseconds)
            .ok_or_else(|| TimestampError::OutOfRange(format!("{} + {}", self, duration)))
    }

    /// Blocks the calling thread until this instant; returns at once if it has passed.
    pub fn sleep_until(&self) {
        let remaining = self.nanoseconds.saturating_sub(Self::now().nanoseconds);
        if let Ok(remaining) = u64::try_from(remaining) {
            log::debug!("sleeping {} ns until {}", remaining, self);
            thread::sleep(Duration::from_nanos(remaining));
        }
    }

    pub fn to_iso8601_string(&self) -> String {
        self.as_datetime()
            .to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_iso8601_string())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso8601_str(s)
    }
}

impl Sub for Timestamp {
    type Output = Time;

    fn sub(self, other: Self) -> Time {
        self.difference(&other)
    }
}

impl Add<Time> for Timestamp {
    type Output = Result<Timestamp>;

    fn add(self, duration: Time) -> Self::Output {
        self.offset(duration)
    }
}

impl Sub<Time> for Timestamp {
    type Output = Result<Timestamp>;

    fn sub(self, duration: Time) -> Self::Output {
        self.offset(-duration)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_rfc3339() -> Result<()> {
        let ts = Timestamp::from_iso8601_str("1970-01-01T00:00:01.5Z")?;
        assert_eq!(ts.as_nanoseconds(), 1_500_000_000);
        let ts = Timestamp::from_iso8601_str("1970-01-01T01:00:00+01:00")?;
        assert_eq!(ts.as_nanoseconds(), 0);
        Ok(())
    }

    #[test]
    fn test_parse_naive_as_utc() -> Result<()> {
        let ts: Timestamp = "2001-09-09T01:46:40".parse()?;
        assert_eq!(ts.as_nanoseconds(), 1_000_000_000_000_000_000);
        let ts: Timestamp = "2001-09-09 01:46:40.25".parse()?;
        assert_abs_diff_eq!(ts.as_seconds(), 1e9 + 0.25, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_parse_failure() {
        assert!(matches!(
            Timestamp::from_iso8601_str("yesterday"),
            Err(TimestampError::Parse(_))
        ));
    }

    #[test]
    fn test_display() {
        let ts = Timestamp::from_nanoseconds(1_500_000_000);
        assert_eq!(ts.to_string(), "1970-01-01T00:00:01.500000000Z");
    }

    #[test]
    fn test_difference_and_offset() -> Result<()> {
        let a = Timestamp::from_seconds(10.)?;
        let b = Timestamp::from_seconds(12.5)?;
        assert_abs_diff_eq!((b - a).in_seconds(), 2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(a.difference(&b).in_milliseconds(), -2_500., epsilon = 1e-9);
        assert_eq!(a.offset(Time::milliseconds(2_500.))?, b);
        assert_eq!((b - Time::seconds(2.5))?, a);
        assert_eq!((a + Time::minutes(1.))?.as_nanoseconds(), 70_000_000_000);
        Ok(())
    }

    #[test]
    fn test_offset_rejects_powers() {
        let a = Timestamp::from_nanoseconds(0);
        assert!(matches!(
            a.offset(Time::seconds(1.).pow(2.)),
            Err(TimestampError::Unit(UnitError::IncompatiblePower { .. }))
        ));
        assert!(matches!(
            a.offset(Time::hours(1e12)),
            Err(TimestampError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_offset_keeps_nanoseconds_of_present_day_instants() -> Result<()> {
        let t = Timestamp::from_nanoseconds(1_700_000_000_000_000_001);
        assert_eq!(t.offset(Time::seconds(0.))?, t);
        assert_eq!(
            t.offset(Time::nanoseconds(1.))?.as_nanoseconds(),
            1_700_000_000_000_000_002
        );
        assert_eq!(
            (t + Time::microseconds(3.))?.as_nanoseconds(),
            1_700_000_000_000_003_001
        );
        assert_eq!(
            (t - Time::nanoseconds(7.))?.as_nanoseconds(),
            1_699_999_999_999_999_994
        );
        assert_eq!(
            (t + Time::hours(1.))?.as_nanoseconds(),
            1_700_003_600_000_000_001
        );
        Ok(())
    }

    #[test]
    fn test_difference_of_present_day_instants() {
        let a = Timestamp::from_nanoseconds(1_700_000_000_000_000_001);
        let b = Timestamp::from_nanoseconds(1_700_000_000_000_000_258);
        assert_eq!((b - a).in_nanoseconds().round() as i64, 257);
        assert_eq!(a.difference(&b).in_nanoseconds().round() as i64, -257);
    }

    #[test]
    fn test_offset_overflow() {
        let t = Timestamp::from_nanoseconds(i64::MAX - 1);
        assert!(matches!(
            t.offset(Time::nanoseconds(2.)),
            Err(TimestampError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let a = Timestamp::from_nanoseconds(-1);
        let b = Timestamp::from_nanoseconds(1);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
