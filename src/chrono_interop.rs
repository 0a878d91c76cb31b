//! Conversions between [`Date`] and `chrono` values.
//!
//! Date-times convert through their wall-clock date in their own offset, so a
//! `DateTime` late in the evening west of UTC keeps its local day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

use crate::{Date, DateError};

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        match Self::from_ymd_opt(i32::from(date.year()), u32::from(date.month()), u32::from(date.day())) {
            Some(naive) => naive,
            None => unreachable!("{date} is outside chrono's calendar"),
        }
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let out_of_range = || DateError::InvalidFormat(value.to_string());
        let year = u16::try_from(value.year()).map_err(|_| out_of_range())?;
        let month = u8::try_from(value.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(value.day()).map_err(|_| out_of_range())?;
        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<NaiveDateTime> for Date {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::try_from(value.date())
    }
}

impl<Tz: TimeZone> TryFrom<&DateTime<Tz>> for Date {
    type Error = DateError;

    fn try_from(value: &DateTime<Tz>) -> Result<Self, Self::Error> {
        Self::try_from(value.date_naive())
    }
}
