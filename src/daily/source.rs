//! Where "today" comes from
//!
//! The engine never reads the clock itself; callers hand it a [`DateSource`].

use std::time::{SystemTime, UNIX_EPOCH};

use super::CalendarDate;

const SECONDS_PER_DAY: i64 = 86_400;

/// Supplies the current calendar date in a fixed reference timezone
pub trait DateSource: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Always returns the same date
///
/// Used for tests and for `--date` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate(pub CalendarDate);

impl DateSource for FixedDate {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// Reads the system clock and converts it to a date at a fixed UTC offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemDate {
    utc_offset_minutes: i32,
}

impl SystemDate {
    /// Date as seen in UTC
    #[must_use]
    pub const fn utc() -> Self {
        Self {
            utc_offset_minutes: 0,
        }
    }

    /// Date as seen at `minutes` east of UTC (e.g. 480 for UTC+8)
    #[must_use]
    pub const fn with_offset_minutes(minutes: i32) -> Self {
        Self {
            utc_offset_minutes: minutes,
        }
    }

    /// Convert seconds since the Unix epoch to this source's calendar date
    #[must_use]
    pub const fn date_at(&self, unix_seconds: i64) -> CalendarDate {
        let local = unix_seconds + self.utc_offset_minutes as i64 * 60;
        CalendarDate::from_days_since_unix_epoch(local.div_euclid(SECONDS_PER_DAY))
    }
}

impl DateSource for SystemDate {
    fn today(&self) -> CalendarDate {
        let unix_seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        };
        self.date_at(unix_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_date_never_changes() {
        let date = CalendarDate::new(2022, 1, 1).unwrap();
        let source = FixedDate(date);
        assert_eq!(source.today(), date);
        assert_eq!(source.today(), date);
    }

    #[test]
    fn time_of_day_is_dropped() {
        let utc = SystemDate::utc();
        let midnight = 18_797 * SECONDS_PER_DAY;
        let expected = CalendarDate::new(2021, 6, 19).unwrap();

        assert_eq!(utc.date_at(midnight), expected);
        assert_eq!(utc.date_at(midnight + SECONDS_PER_DAY - 1), expected);
        assert_eq!(utc.date_at(midnight - 1), expected.add_days(-1));
    }

    #[test]
    fn offset_moves_the_day_boundary() {
        // 2021-06-19 20:00 UTC is already the 20th at UTC+8
        let evening = 18_797 * SECONDS_PER_DAY + 20 * 3600;
        let utc = SystemDate::utc().date_at(evening);
        let east = SystemDate::with_offset_minutes(8 * 60).date_at(evening);
        let west = SystemDate::with_offset_minutes(-23 * 60).date_at(evening);

        assert_eq!(utc.to_string(), "2021-06-19");
        assert_eq!(east.to_string(), "2021-06-20");
        assert_eq!(west.to_string(), "2021-06-18");
    }

    #[test]
    fn system_date_is_after_the_puzzle_epoch() {
        let today = SystemDate::utc().today();
        assert!(today > CalendarDate::new(2021, 6, 19).unwrap());
    }
}
