//! Time-of-day handling for timetable entries.
//!
//! Timetables publish departures as "HH:MM" strings. The widget only ever
//! looks at a single service day and never wraps past midnight, so a
//! departure is just a number of minutes since midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Minutes in a day; every valid `ClockTime` is below this.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use next_train::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("06:07").unwrap();
/// assert_eq!(t.minutes_since_midnight(), 367);
/// assert_eq!(t.to_string(), "06:07");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// The hour may be one or two digits; the minute is always two.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_train::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    /// assert!(ClockTime::parse_hhmm("6:07").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0607").is_err());
    /// assert!(ClockTime::parse_hhmm("06:7").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        if hour.is_empty() || hour.len() > 2 {
            return Err(TimeError::new("hour must be one or two digits"));
        }
        if minute.len() != 2 {
            return Err(TimeError::new("minute must be two digits"));
        }

        let hour = parse_digits(hour).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute =
            parse_digits(minute).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// The time of day of a wall-clock reading, seconds discarded.
    pub fn of(datetime: &NaiveDateTime) -> Self {
        Self::from_naive_time(datetime.time())
    }

    /// Convert a `NaiveTime`, discarding seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            minutes: time.hour() * 60 + time.minute(),
        }
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Anchor this time of day on a calendar date.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        debug_assert!(self.minutes < MINUTES_PER_DAY);
        date.and_time(NaiveTime::MIN) + chrono::Duration::minutes(i64::from(self.minutes))
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse one or two ASCII digits into a u32.
fn parse_digits(s: &str) -> Option<u32> {
    s.chars().try_fold(0u32, |acc, c| Some(acc * 10 + c.to_digit(10)?))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Any valid HH:MM string parses successfully
        #[test]
        fn valid_hhmm_parses(time_str in valid_time()) {
            prop_assert!(ClockTime::parse_hhmm(&time_str).is_ok());
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(time_str in valid_time()) {
            let parsed = ClockTime::parse_hhmm(&time_str).unwrap();
            prop_assert_eq!(parsed.to_string(), time_str);
        }

        /// Minutes since midnight is hours*60+minutes
        #[test]
        fn minutes_since_midnight(hour in 0u32..24, minute in 0u32..60) {
            let t = ClockTime::parse_hhmm(&format!("{hour}:{minute:02}")).unwrap();
            prop_assert_eq!(t.minutes_since_midnight(), hour * 60 + minute);
        }

        /// Hours past 23 are always rejected
        #[test]
        fn out_of_range_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{hour}:{minute:02}");
            prop_assert!(ClockTime::parse_hhmm(&s).is_err());
        }
    }
}
