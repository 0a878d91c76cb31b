//! Validation of loosely typed range candidates.
//!
//! A candidate is any JSON value that should describe a range as
//! `{"startDate": "YYYY-MM-DD", "endDate": "YYYY-MM-DD"}`. Checks run in a fixed
//! order across both fields: missing, then null, then not a date, then inverted.
//! Dates carrying a time of day (`2022-01-05T10:30:00Z`) are truncated to their
//! calendar day.

use serde_json::Value;
use tracing::debug;

use crate::{Date, DateField, DateRange, DateRangeCheckerError, TIME_DESIGNATOR, check_date_range_format};

/// Validates a candidate and converts it to a [`DateRange`].
///
/// `None` stands for a candidate that was never supplied.
///
/// # Errors
/// Returns the first failing check as a `DateRangeCheckerError`.
pub fn check_date_range_value(candidate: Option<&Value>) -> Result<DateRange, DateRangeCheckerError> {
    let object = candidate.and_then(Value::as_object).ok_or_else(|| reject(DateRangeCheckerError::Undefined))?;

    let (Some(start), Some(end)) = (object.get(DateField::StartDate.key()), object.get(DateField::EndDate.key()))
    else {
        return Err(reject(DateRangeCheckerError::Undefined));
    };

    for (field, value) in [(DateField::StartDate, start), (DateField::EndDate, end)] {
        if value.is_null() {
            return Err(reject(DateRangeCheckerError::Null { field }));
        }
    }

    let range = DateRange {
        start_date: date_from_value(start, DateField::StartDate)?,
        end_date:   date_from_value(end, DateField::EndDate)?,
    };
    check_date_range_format(&range)?;
    Ok(range)
}

fn date_from_value(value: &Value, field: DateField) -> Result<Date, DateRangeCheckerError> {
    match value.as_str() {
        Some(s) => parse_date(s, field),
        None => Err(reject(DateRangeCheckerError::NotADate { field })),
    }
}

/// Parses one end of a range, dropping a well-formed time of day.
pub(crate) fn parse_date(s: &str, field: DateField) -> Result<Date, DateRangeCheckerError> {
    let day = match s.split_once(TIME_DESIGNATOR) {
        Some((day, time)) if is_time_of_day(time.trim_end()) => day,
        Some((_, time)) => {
            debug!(%field, time, "unparseable time of day");
            return Err(DateRangeCheckerError::NotADate { field });
        },
        None => s,
    };
    day.parse::<Date>().map_err(|error| {
        debug!(%field, %error, "unparseable date");
        DateRangeCheckerError::NotADate { field }
    })
}

/// Accepts `HH:MM[:SS[.fff]]` followed by an optional `Z` or `±HH:MM`.
fn is_time_of_day(s: &str) -> bool {
    let clock = if let Some(clock) = s.strip_suffix('Z') {
        clock
    } else if let Some(pos) = s.rfind(['+', '-']) {
        if !is_offset(&s[pos + 1..]) {
            return false;
        }
        &s[..pos]
    } else {
        s
    };

    let (clock, fraction) = match clock.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (clock, None),
    };
    let parts: Vec<&str> = clock.split(':').collect();
    let clock_ok = match parts.as_slice() {
        [hour, minute] => fraction.is_none() && is_two_digits(hour, 23) && is_two_digits(minute, 59),
        [hour, minute, second] => {
            is_two_digits(hour, 23) && is_two_digits(minute, 59) && is_two_digits(second, 60)
        },
        _ => false,
    };
    clock_ok && fraction.is_none_or(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

fn is_offset(s: &str) -> bool {
    matches!(s.split_once(':'), Some((hours, minutes)) if is_two_digits(hours, 23) && is_two_digits(minutes, 59))
}

fn is_two_digits(s: &str, max: u8) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) && s.parse::<u8>().is_ok_and(|n| n <= max)
}

fn reject(error: DateRangeCheckerError) -> DateRangeCheckerError {
    debug!(%error, "rejected date range candidate");
    error
}
