//! Relations between a reference range and a comparison range.
//!
//! Every public function validates both ranges with [`check_date_range_format`]
//! before comparing anything, so an inverted range is rejected whichever
//! operation receives it.

use tracing::{debug, trace};

use crate::{Date, DateRange, Days, prelude::*};

/// Which end of a range a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "startDate")]
    StartDate,
    #[display(fmt = "endDate")]
    EndDate,
}

impl DateField {
    /// Key of this field in the serialized object form
    pub const fn key(self) -> &'static str {
        match self {
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }
}

/// Cause of a [`DateRangeCheckerError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckErrorKind {
    Undefined,
    Null,
    NotADate,
    StartAfterEnd,
}

/// Error returned when a range fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeCheckerError {
    /// The range, or one of its dates, is missing.
    #[error("DateRange must be defined and contain both dates.")]
    Undefined,

    /// A date is present but explicitly empty.
    #[error("{field} cannot be null.")]
    Null { field: DateField },

    /// A date is present but does not hold a valid calendar date.
    #[error("{field} must be instances of Date.")]
    NotADate { field: DateField },

    /// The range is inverted.
    #[error("startDate cannot be after endDate ({start} > {end}).")]
    StartAfterEnd { start: Date, end: Date },
}

impl DateRangeCheckerError {
    pub const fn kind(&self) -> CheckErrorKind {
        match self {
            Self::Undefined => CheckErrorKind::Undefined,
            Self::Null { .. } => CheckErrorKind::Null,
            Self::NotADate { .. } => CheckErrorKind::NotADate,
            Self::StartAfterEnd { .. } => CheckErrorKind::StartAfterEnd,
        }
    }
}

/// Validates a typed range.
///
/// A `DateRange` always holds two real dates, so only the ordering can be wrong here.
/// Missing, null and mistyped dates are caught earlier by [`crate::input`].
///
/// # Errors
/// Returns `DateRangeCheckerError::StartAfterEnd` if `start_date > end_date`.
pub fn check_date_range_format(range: &DateRange) -> Result<(), DateRangeCheckerError> {
    if range.start_date > range.end_date {
        let error = DateRangeCheckerError::StartAfterEnd {
            start: range.start_date,
            end:   range.end_date,
        };
        debug!(%error, "rejected date range");
        return Err(error);
    }
    Ok(())
}

fn check_both(reference: &DateRange, comparison: &DateRange) -> Result<(), DateRangeCheckerError> {
    check_date_range_format(reference)?;
    check_date_range_format(comparison)
}

/// Whether the reference start date lies within the comparison range (inclusive).
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn is_start_date_in_range(reference: &DateRange, comparison: &DateRange) -> Result<bool, DateRangeCheckerError> {
    check_both(reference, comparison)?;
    Ok(comparison.contains(&reference.start_date))
}

/// Whether the reference end date lies within the comparison range (inclusive).
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn is_end_date_in_range(reference: &DateRange, comparison: &DateRange) -> Result<bool, DateRangeCheckerError> {
    check_both(reference, comparison)?;
    Ok(comparison.contains(&reference.end_date))
}

/// Whether the reference range lies entirely within the comparison range.
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn is_start_date_and_end_date_in_range(
    reference: &DateRange,
    comparison: &DateRange,
) -> Result<bool, DateRangeCheckerError> {
    Ok(is_start_date_in_range(reference, comparison)? && is_end_date_in_range(reference, comparison)?)
}

/// Whether the reference range encloses (or equals) the comparison range.
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn is_start_date_and_end_date_include_range(
    reference: &DateRange,
    comparison: &DateRange,
) -> Result<bool, DateRangeCheckerError> {
    check_both(reference, comparison)?;
    Ok(reference.start_date <= comparison.start_date && reference.end_date >= comparison.end_date)
}

/// Whether the two ranges share at least one day.
///
/// True when the reference start or end falls inside the comparison, or the
/// reference encloses the comparison. Together these cover every way two
/// closed ranges can intersect.
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn is_in_range(reference: &DateRange, comparison: &DateRange) -> Result<bool, DateRangeCheckerError> {
    Ok(is_start_date_in_range(reference, comparison)?
        || is_end_date_in_range(reference, comparison)?
        || is_start_date_and_end_date_include_range(reference, comparison)?)
}

/// Every day covered by both ranges, ascending. Empty when they do not intersect.
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn find_overlapping_dates(reference: &DateRange, comparison: &DateRange) -> Result<Vec<Date>, DateRangeCheckerError> {
    check_both(reference, comparison)?;
    if !is_in_range(reference, comparison)? {
        return Ok(Vec::new());
    }

    let overlap_start = reference.start_date.max(comparison.start_date);
    let overlap_end = reference.end_date.min(comparison.end_date);
    let dates: Vec<Date> = Days::new(overlap_start, overlap_end).collect();
    trace!(%reference, %comparison, days = dates.len(), "found overlapping dates");
    Ok(dates)
}

/// Every day covered by exactly one of the two ranges.
///
/// Disjoint ranges yield all reference days followed by all comparison days,
/// in argument order. Intersecting ranges yield the days before the later
/// start, then the days after the earlier end. Equal ranges yield nothing.
///
/// # Errors
/// Returns `DateRangeCheckerError` if either range is inverted.
pub fn find_non_overlapping_dates(
    reference: &DateRange,
    comparison: &DateRange,
) -> Result<Vec<Date>, DateRangeCheckerError> {
    check_both(reference, comparison)?;

    let dates: Vec<Date> = if is_in_range(reference, comparison)? {
        let (first_start, last_start) = min_max(reference.start_date, comparison.start_date);
        let (first_end, last_end) = min_max(reference.end_date, comparison.end_date);
        Days::until(first_start, last_start)
            .chain(Days::after(first_end, last_end))
            .collect()
    } else {
        reference.days().chain(comparison.days()).collect()
    };

    trace!(%reference, %comparison, days = dates.len(), "found non-overlapping dates");
    Ok(dates)
}

fn min_max(a: Date, b: Date) -> (Date, Date) {
    if a <= b { (a, b) } else { (b, a) }
}
