use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Date, DateField, DateRangeCheckerError, Days, RANGE_SEPARATOR, check_date_range_format, input, prelude::*};

/// A closed range of calendar days, `start_date..=end_date`.
///
/// The fields are public so callers can assemble a range just before a call; an
/// inverted range is representable but every operation rejects it. Use
/// [`DateRange::new`] to check the ordering up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{start_date}/{end_date}")]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Date,
    pub end_date:   Date,
}

impl DateRange {
    /// Creates a range, rejecting `start_date > end_date`.
    ///
    /// # Errors
    /// Returns `DateRangeCheckerError::StartAfterEnd` if the dates are inverted.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self, DateRangeCheckerError> {
        let range = Self { start_date, end_date };
        check_date_range_format(&range)?;
        Ok(range)
    }

    /// A range covering exactly one day
    pub const fn single(date: Date) -> Self {
        Self {
            start_date: date,
            end_date:   date,
        }
    }

    /// Returns both dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start_date, self.end_date)
    }

    /// Whether `date` falls on or between the two ends
    pub fn contains(&self, date: &Date) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    /// Every day of the range in ascending order. Inverted ranges yield nothing.
    pub const fn days(&self) -> Days {
        Days::new(self.start_date, self.end_date)
    }

    /// Number of days covered, counting both ends
    pub fn num_days(&self) -> usize {
        self.days().len()
    }
}

impl From<Date> for DateRange {
    fn from(date: Date) -> Self {
        Self::single(date)
    }
}

impl FromStr for DateRange {
    type Err = DateRangeCheckerError;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.trim().split_once(RANGE_SEPARATOR).ok_or(DateRangeCheckerError::Undefined)?;
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(DateRangeCheckerError::Undefined);
        }

        let start_date = input::parse_date(start, DateField::StartDate)?;
        let end_date = input::parse_date(end, DateField::EndDate)?;
        Self::new(start_date, end_date)
    }
}

/// Reads the object form through `serde_json::Value`, so only self-describing
/// formats (JSON, YAML, ...) can deserialize a `DateRange`.
impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        input::check_date_range_value(Some(&value)).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, iso_strings, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          &'static str,
            end:            &'static str,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          "2022-01-01",
                end:            "2022-01-15",
                should_succeed: true,
                description:    "start before end",
            },
            TestCase {
                start:          "2022-01-15",
                end:            "2022-01-01",
                should_succeed: false,
                description:    "start after end",
            },
            TestCase {
                start:          "2022-01-05",
                end:            "2022-01-05",
                should_succeed: true,
                description:    "single day",
            },
        ];

        for case in &cases {
            let unchecked = range(case.start, case.end);
            let result = DateRange::new(unchecked.start_date, unchecked.end_date);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_new_reports_inverted_dates() {
        let result = DateRange::new(date(2022, 1, 15), date(2022, 1, 1));
        assert_eq!(
            result,
            Err(DateRangeCheckerError::StartAfterEnd {
                start: date(2022, 1, 15),
                end:   date(2022, 1, 1),
            })
        );
    }

    #[test]
    fn test_single_and_from_date() {
        let day = date(2022, 1, 5);
        let single = DateRange::single(day);
        assert_eq!(single.dates(), (day, day));
        assert_eq!(DateRange::from(day), single);
        assert_eq!(single.num_days(), 1);
        assert_eq!(single.days().collect::<Vec<_>>(), vec![day]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range("2022-01-01", "2022-01-10");
        assert!(r.contains(&date(2022, 1, 1)));
        assert!(r.contains(&date(2022, 1, 5)));
        assert!(r.contains(&date(2022, 1, 10)));
        assert!(!r.contains(&date(2021, 12, 31)));
        assert!(!r.contains(&date(2022, 1, 11)));
    }

    #[test]
    fn test_days_does_not_touch_range() {
        let r = range("2022-01-30", "2022-02-02");
        let days: Vec<Date> = r.days().collect();
        assert_eq!(iso_strings(&days), ["2022-01-30", "2022-01-31", "2022-02-01", "2022-02-02"]);
        assert_eq!(r, range("2022-01-30", "2022-02-02"));
        assert_eq!(r.num_days(), 4);
    }

    #[test]
    fn test_inverted_range_has_no_days() {
        assert_eq!(range("2022-01-10", "2022-01-01").num_days(), 0);
    }

    #[test]
    fn test_display_and_parse() {
        let r = range("2022-01-01", "2022-01-15");
        assert_eq!(r.to_string(), "2022-01-01/2022-01-15");
        assert_eq!("2022-01-01/2022-01-15".parse::<DateRange>(), Ok(r));
        assert_eq!(" 2022-01-01 / 2022-01-15 ".parse::<DateRange>(), Ok(r));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("2022-01-01".parse::<DateRange>(), Err(DateRangeCheckerError::Undefined));
        assert_eq!("2022-01-01/".parse::<DateRange>(), Err(DateRangeCheckerError::Undefined));
        assert_eq!(
            "soon/2022-01-15".parse::<DateRange>(),
            Err(DateRangeCheckerError::NotADate {
                field: DateField::StartDate,
            })
        );
        assert_eq!(
            "2022-01-01/2022-01-02/2022-01-03".parse::<DateRange>(),
            Err(DateRangeCheckerError::NotADate {
                field: DateField::EndDate,
            })
        );
        assert!(matches!(
            "2022-01-15/2022-01-01".parse::<DateRange>(),
            Err(DateRangeCheckerError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_ordering_by_start_then_end() {
        assert!(range("2022-01-01", "2022-01-10") < range("2022-01-02", "2022-01-03"));
        assert!(range("2022-01-01", "2022-01-10") < range("2022-01-01", "2022-01-11"));
    }

    #[test]
    fn test_serde_object_format() {
        let r = range("2022-01-01", "2022-01-15");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"startDate":"2022-01-01","endDate":"2022-01-15"}"#);

        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_deserialize_reports_validation_message() {
        let err = serde_json::from_str::<DateRange>(r#"{"startDate":null,"endDate":"2022-01-15"}"#).unwrap_err();
        assert!(err.to_string().contains("startDate cannot be null."), "{err}");

        let err = serde_json::from_str::<DateRange>(r#"{"startDate":"2022-01-20","endDate":"2022-01-15"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("startDate cannot be after endDate"), "{err}");
    }
}
