//! Construction helpers shared by the unit tests.

use crate::{Date, DateRange};

pub fn date(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap_or_else(|e| panic!("invalid test date {year}-{month}-{day}: {e}"))
}

/// Parses `YYYY-MM-DD`
pub fn iso(s: &str) -> Date {
    s.parse().unwrap_or_else(|e| panic!("invalid test date {s:?}: {e}"))
}

/// Builds a range from two `YYYY-MM-DD` strings without checking their order.
pub fn range(start: &str, end: &str) -> DateRange {
    DateRange {
        start_date: iso(start),
        end_date:   iso(end),
    }
}

/// Collects dates into their ISO strings for readable assertions
pub fn iso_strings(dates: &[Date]) -> Vec<String> {
    dates.iter().map(ToString::to_string).collect()
}
