/// Earliest supported year
pub const MIN_YEAR: u16 = 1;
/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of months in a year
pub const MAX_MONTH: u8 = 12;
/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;
/// Length of February in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths for a common year, indexed by month number (index 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a common year
pub(crate) const DAYS_IN_COMMON_YEAR: u32 = 365;

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between date components (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Digits in each component of `YYYY-MM-DD`
pub(crate) const YEAR_DIGITS: usize = 4;
pub(crate) const MONTH_DIGITS: usize = 2;
pub(crate) const DAY_DIGITS: usize = 2;
/// Separator between the two ends of a range (`start/end`)
pub const RANGE_SEPARATOR: char = '/';
/// Separator between the date and an ignored time of day (`YYYY-MM-DDTHH:MM`)
pub const TIME_DESIGNATOR: char = 'T';
