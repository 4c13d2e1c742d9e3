//! Next-departure projection.
//!
//! Filters a station's departures in one direction down to the next two
//! that leave strictly after a reference time. A single service day only:
//! nothing wraps past midnight, so late in the evening the projection is
//! simply empty.

use tracing::warn;

use crate::domain::{ClockTime, Departure};

/// The next and following departures relative to some time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub next: Option<Departure>,
    pub following: Option<Departure>,
}

impl Projection {
    /// A projection with nothing to show.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True once the last departure of the day has left.
    pub fn is_service_ended(&self) -> bool {
        self.next.is_none()
    }
}

/// Project `departures` onto the time `now`.
///
/// `departures` must be in ascending time order. Entries whose time
/// cannot be parsed are skipped. The input is never modified.
pub fn project(departures: &[Departure], now: ClockTime) -> Projection {
    let mut upcoming = departures
        .iter()
        .filter(|departure| match departure.clock_time() {
            Ok(time) => time > now,
            Err(e) => {
                warn!(time = %departure.time, error = %e, "skipping malformed departure");
                false
            }
        })
        .cloned();

    Projection {
        next: upcoming.next(),
        following: upcoming.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn dep(time: &str) -> Departure {
        Departure::new(time, "普通", "軽井沢")
    }

    fn ueda_up() -> Vec<Departure> {
        ["05:48", "06:07", "06:39", "07:02", "23:05"]
            .into_iter()
            .map(dep)
            .collect()
    }

    #[test]
    fn next_and_following() {
        let projection = project(&ueda_up(), t("06:00"));
        assert_eq!(projection.next, Some(dep("06:07")));
        assert_eq!(projection.following, Some(dep("06:39")));
        assert!(!projection.is_service_ended());
    }

    #[test]
    fn before_first_departure() {
        let projection = project(&ueda_up(), t("00:00"));
        assert_eq!(projection.next, Some(dep("05:48")));
        assert_eq!(projection.following, Some(dep("06:07")));
    }

    #[test]
    fn late_evening_is_empty() {
        let projection = project(&ueda_up(), t("23:50"));
        assert_eq!(projection, Projection::empty());
        assert!(projection.is_service_ended());
    }

    #[test]
    fn departure_at_now_is_excluded() {
        let projection = project(&ueda_up(), t("23:05"));
        assert!(projection.next.is_none());

        let projection = project(&ueda_up(), t("23:04"));
        assert_eq!(projection.next, Some(dep("23:05")));
        assert!(projection.following.is_none());
    }

    #[test]
    fn equal_time_excluded_mid_day() {
        let projection = project(&ueda_up(), t("06:07"));
        assert_eq!(projection.next, Some(dep("06:39")));
        assert_eq!(projection.following, Some(dep("07:02")));
    }

    #[test]
    fn empty_list() {
        assert_eq!(project(&[], t("12:00")), Projection::empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let departures = vec![dep("06:07"), dep("6時39分"), dep("25:00"), dep("07:02")];
        let projection = project(&departures, t("06:00"));
        assert_eq!(projection.next, Some(dep("06:07")));
        assert_eq!(projection.following, Some(dep("07:02")));
    }

    #[test]
    fn input_is_untouched() {
        let departures = ueda_up();
        let before = departures.clone();
        let _ = project(&departures, t("06:00"));
        assert_eq!(departures, before);
    }
}
