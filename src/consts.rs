/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 0;

/// Maximum valid year (inclusive), the largest 4-digit year
pub const MAX_YEAR: u16 = 9999;

/// First week of every ISO year
pub const MIN_WEEK: u8 = 1;

/// Weeks in an ordinary ISO year
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;
/// Weeks in a long ISO year (one carrying a leap week)
pub const WEEKS_IN_LONG_YEAR: u8 = 53;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub(crate) const DAYS_IN_WEEK: i32 = 7;

/// A year is long when its December 31st falls on a Thursday...
pub(crate) const LONG_YEAR_LAST_WEEKDAY: i32 = 4;
/// ...or when the previous year's December 31st falls on a Wednesday
pub(crate) const LONG_YEAR_PREVIOUS_LAST_WEEKDAY: i32 = 3;

/// Separator between the year and the week designator
pub const DATE_SEPARATOR: char = '-';
/// Week designator preceding the week number
pub const WEEK_DESIGNATOR: char = 'W';

/// Length of the canonical `YYYY-Www` encoding in bytes
pub const ENCODED_LEN: usize = 8;
/// Digits in the zero-padded year field
pub(crate) const YEAR_DIGITS: usize = 4;
/// Digits in the zero-padded week field
pub(crate) const WEEK_DIGITS: usize = 2;
