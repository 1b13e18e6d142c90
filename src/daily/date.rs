//! Calendar dates without time of day or timezone
//!
//! Day arithmetic goes through a day count relative to 1970-01-01 using the
//! proleptic Gregorian calendar (Howard Hinnant's `days_from_civil`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for invalid dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    Invalid { year: i32, month: u8, day: u8 },

    #[error("expected a date like 2021-06-19, got {0:?}")]
    Parse(String),
}

/// A day in the proleptic Gregorian calendar
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Create a date, checking month and day against the calendar
    ///
    /// # Errors
    /// Returns `DateError::Invalid` for a month outside 1-12 or a day past the end
    /// of the month (February 29th only in leap years).
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::daily::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2024, 2, 29).is_ok());
    /// assert!(CalendarDate::new(2023, 2, 29).is_err());
    /// ```
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > 12 || day == 0 || day > days_in_month(year, month) {
            return Err(DateError::Invalid { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Build a date known to be valid at compile time
    pub(crate) const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Days since 1970-01-01 (negative before it)
    #[must_use]
    pub const fn days_since_unix_epoch(self) -> i64 {
        let month = self.month as i64;
        let year = if month <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = (month + 9) % 12; // March = 0
        let day_of_year = (153 * shifted_month + 2) / 5 + self.day as i64 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * 146_097 + day_of_era - 719_468
    }

    /// Inverse of [`days_since_unix_epoch`](Self::days_since_unix_epoch)
    #[must_use]
    pub const fn from_days_since_unix_epoch(days: i64) -> Self {
        let days = days + 719_468;
        let era = days.div_euclid(146_097);
        let day_of_era = days - era * 146_097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier)
    #[must_use]
    pub const fn days_until(self, other: Self) -> i64 {
        other.days_since_unix_epoch() - self.days_since_unix_epoch()
    }

    /// The date `days` days later (or earlier, if negative)
    #[must_use]
    pub const fn add_days(self, days: i64) -> Self {
        Self::from_days_since_unix_epoch(self.days_since_unix_epoch() + days)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DateError::Parse(s.to_string());

        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_error());
        };

        let year = year.parse().map_err(|_| parse_error())?;
        let month = month.parse().map_err(|_| parse_error())?;
        let day = day.parse().map_err(|_| parse_error())?;
        Self::new(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
