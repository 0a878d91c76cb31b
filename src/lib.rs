//! Containment, overlap and day-level difference checks between two closed date ranges.
//!
//! Every operation takes a *reference* range and a *comparison* range, in that order,
//! validates both, and answers relative to the comparison:
//!
//! ```
//! use date_range_checker::{DateRange, find_overlapping_dates, is_in_range};
//!
//! let reference: DateRange = "2022-01-01/2022-01-15".parse()?;
//! let comparison: DateRange = "2022-01-05/2022-01-20".parse()?;
//!
//! assert!(is_in_range(&reference, &comparison)?);
//! assert_eq!(find_overlapping_dates(&reference, &comparison)?.len(), 11);
//! # Ok::<(), date_range_checker::DateRangeCheckerError>(())
//! ```

mod checker;
#[cfg(feature = "chrono")]
mod chrono_interop;
mod consts;
mod days;
pub mod input;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use checker::{
    CheckErrorKind, DateField, DateRangeCheckerError, check_date_range_format, find_non_overlapping_dates,
    find_overlapping_dates, is_end_date_in_range, is_in_range, is_start_date_and_end_date_in_range,
    is_start_date_and_end_date_include_range, is_start_date_in_range,
};
pub use consts::*;
pub use days::Days;
pub use range::DateRange;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use consts::{
    CENTURY_CYCLE, DAY_DIGITS, DAYS_IN_COMMON_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTH_DIGITS, YEAR_DIGITS,
};
use std::str::FromStr;
use types::days_before_month;

/// A single proleptic Gregorian calendar day.
///
/// Ordering is chronological. There is no time of day: values that carry one are
/// truncated to their wall-clock date before they become a `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl Date {
    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in `year`-`month`.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The next calendar day, or `None` after `9999-12-31`.
    pub fn succ(&self) -> Option<Self> {
        let Self { year, month, day } = *self;
        if day.get() < month.length(year) {
            let day = Day::new(day.get() + 1, year, month).ok()?;
            return Some(Self { year, month, day });
        }
        if month.get() < DECEMBER {
            let month = Month::new(month.get() + 1).ok()?;
            return Some(Self {
                year,
                month,
                day: Day::first(),
            });
        }
        let year = year.next()?;
        let month = Month::new(JANUARY).ok()?;
        Some(Self {
            year,
            month,
            day: Day::first(),
        })
    }

    /// The previous calendar day, or `None` before `0001-01-01`.
    pub fn pred(&self) -> Option<Self> {
        let Self { year, month, day } = *self;
        if day.get() > MIN_DAY {
            let day = Day::new(day.get() - 1, year, month).ok()?;
            return Some(Self { year, month, day });
        }
        if month.get() > JANUARY {
            let month = Month::new(month.get() - 1).ok()?;
            return Some(Self {
                year,
                month,
                day: Day::last(year, month),
            });
        }
        let year = year.prev()?;
        let month = Month::new(DECEMBER).ok()?;
        Some(Self {
            year,
            month,
            day: Day::last(year, month),
        })
    }

    /// Days elapsed since `0001-01-01`, which is day 0.
    pub const fn day_number(&self) -> u32 {
        let elapsed_years = (self.year.get() - 1) as u32;
        let leap_days = elapsed_years / LEAP_YEAR_CYCLE as u32 - elapsed_years / CENTURY_CYCLE as u32
            + elapsed_years / GREGORIAN_CYCLE as u32;
        elapsed_years * DAYS_IN_COMMON_YEAR
            + leap_days
            + days_before_month(self.year.get(), self.month.get()) as u32
            + (self.day.get() - MIN_DAY) as u32
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() as i64 - self.day_number() as i64
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        Self::from_ymd(
            parse_number(year, YEAR_DIGITS)?,
            parse_number(month, MONTH_DIGITS)?,
            parse_number(day, DAY_DIGITS)?,
        )
    }
}

/// Parses one date component of exactly `width` ASCII digits
fn parse_number<T: FromStr>(s: &str, width: usize) -> Result<T, DateError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
