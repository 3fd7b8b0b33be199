use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_WEEK, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, LONG_YEAR_LAST_WEEKDAY,
    LONG_YEAR_PREVIOUS_LAST_WEEKDAY, MAX_YEAR, MIN_WEEK, MIN_YEAR, WEEKS_IN_LONG_YEAR,
    WEEKS_IN_SHORT_YEAR,
};
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// An ISO year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (0..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(u16);

impl Year {
    /// The first representable year
    pub const MIN: Self = Self(MIN_YEAR);
    /// The last representable year
    pub const MAX: Self = Self(MAX_YEAR);

    /// Creates a new Year, validating that it fits in four digits
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` if the value is < `MIN_YEAR` or > `MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        u16::try_from(value)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .map(Self)
            .ok_or(ValidationError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Number of ISO weeks in this year, either 52 or 53
    #[inline]
    pub const fn weeks(self) -> u8 {
        weeks_in_year(self.0 as i32)
    }
}

impl TryFrom<i32> for Year {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// An ISO week number guaranteed to be valid for the year it was created with.
/// Uses `NonZeroU8` internally, so 0 is never a valid week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(NonZeroU8);

impl Week {
    /// Creates a new Week, validating it against the week count of `year`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidWeek` if the value is 0 or exceeds the weeks in `year`.
    pub fn new(value: u32, year: Year) -> Result<Self, ValidationError> {
        let max = year.weeks();
        let invalid = || ValidationError::InvalidWeek {
            year: year.into(),
            week: value,
            max,
        };

        let week = u8::try_from(value).map_err(|_| invalid())?;
        if week > max {
            return Err(invalid());
        }
        NonZeroU8::new(week).map(Self).ok_or_else(invalid)
    }

    /// Wraps a week number the caller already knows to be in range for its
    /// year. Only the calendar adapter and the const bounds use this.
    pub(crate) const fn new_trusted(value: u8) -> Self {
        debug_assert!(value >= MIN_WEEK && value <= WEEKS_IN_LONG_YEAR);
        match NonZeroU8::new(value) {
            Some(week) => Self(week),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the week value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Week> for u32 {
    fn from(week: Week) -> Self {
        Self::from(week.0.get())
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0.get()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

/// Weekday of December 31st of `year`, 0 = Sunday.
const fn last_weekday(year: i32) -> i32 {
    (year + year.div_euclid(LEAP_YEAR_CYCLE) - year.div_euclid(CENTURY_CYCLE)
        + year.div_euclid(GREGORIAN_CYCLE))
    .rem_euclid(DAYS_IN_WEEK)
}

/// Whether `year` carries a leap week (53 ISO weeks).
pub const fn is_long_year(year: i32) -> bool {
    last_weekday(year) == LONG_YEAR_LAST_WEEKDAY
        || last_weekday(year - 1) == LONG_YEAR_PREVIOUS_LAST_WEEKDAY
}

/// Number of ISO weeks in `year`. Defined for every year, valid or not.
pub const fn weeks_in_year(year: i32) -> u8 {
    if is_long_year(year) {
        WEEKS_IN_LONG_YEAR
    } else {
        WEEKS_IN_SHORT_YEAR
    }
}

/// Checks that `year` is in `0..=9999` and `week` in `1..=weeks_in_year(year)`.
///
/// # Errors
/// Returns `ValidationError::InvalidYear` first, then `ValidationError::InvalidWeek`.
pub fn check_year_and_week(year: i32, week: u32) -> Result<(), ValidationError> {
    let year = Year::new(year)?;
    Week::new(week, year).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(0).is_ok());
        assert!(Year::new(2004).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(-1), Err(ValidationError::InvalidYear(-1))));
        assert!(matches!(Year::new(-100), Err(ValidationError::InvalidYear(-100))));
        assert!(matches!(Year::new(10000), Err(ValidationError::InvalidYear(10000))));
        assert!(matches!(
            Year::new(i32::MAX),
            Err(ValidationError::InvalidYear(i32::MAX))
        ));
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(1).unwrap().to_string(), "0001");
        assert_eq!(Year::new(2004).unwrap().to_string(), "2004");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2004).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2004");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("10000").is_err());
        assert!(serde_json::from_str::<Year>("-1").is_err());
    }

    #[test]
    fn test_week_new_depends_on_year() {
        let long = Year::new(2004).unwrap();
        let short = Year::new(2003).unwrap();

        assert_eq!(Week::new(53, long).unwrap().get(), 53);
        assert!(matches!(
            Week::new(53, short),
            Err(ValidationError::InvalidWeek {
                year: 2003,
                week: 53,
                max: 52
            })
        ));
    }

    #[test]
    fn test_week_new_invalid() {
        let year = Year::new(2001).unwrap();
        assert!(matches!(
            Week::new(0, year),
            Err(ValidationError::InvalidWeek { week: 0, .. })
        ));
        assert!(matches!(
            Week::new(99, year),
            Err(ValidationError::InvalidWeek { week: 99, .. })
        ));
        assert!(matches!(
            Week::new(300, year),
            Err(ValidationError::InvalidWeek { week: 300, .. })
        ));
    }

    #[test]
    fn test_week_display_is_zero_padded() {
        let year = Year::new(2001).unwrap();
        assert_eq!(Week::new(1, year).unwrap().to_string(), "01");
        assert_eq!(Week::new(22, year).unwrap().to_string(), "22");
    }

    #[test]
    fn test_weeks_in_year_cases() {
        struct TestCase {
            year:        i32,
            weeks:       u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2003,
                weeks:       52,
                description: "ordinary year",
            },
            TestCase {
                year:        2004,
                weeks:       53,
                description: "leap year starting on Thursday",
            },
            TestCase {
                year:        2009,
                weeks:       53,
                description: "common year starting on Thursday",
            },
            TestCase {
                year:        2015,
                weeks:       53,
                description: "common year starting on Thursday",
            },
            TestCase {
                year:        2020,
                weeks:       53,
                description: "leap year starting on Wednesday",
            },
            TestCase {
                year:        2021,
                weeks:       52,
                description: "year after a long year",
            },
            TestCase {
                year:        2026,
                weeks:       53,
                description: "common year starting on Thursday",
            },
            TestCase {
                year:        1900,
                weeks:       52,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        9999,
                weeks:       52,
                description: "last representable year",
            },
        ];

        for case in &cases {
            assert_eq!(
                weeks_in_year(case.year),
                case.weeks,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_long_years_of_400_year_cycle() {
        // The Gregorian cycle has exactly 71 long ISO years.
        let long = (2000..2400).filter(|&y| is_long_year(y)).count();
        assert_eq!(long, 71);
    }

    #[test]
    fn test_weeks_in_year_matches_chrono() {
        use chrono::{Datelike, NaiveDate};

        for year in (0..=9999).step_by(7) {
            // December 28th always falls in the last ISO week of its year.
            let dec_28 = NaiveDate::from_ymd_opt(year, 12, 28).unwrap();
            let week = u8::try_from(dec_28.iso_week().week()).unwrap();
            assert_eq!(weeks_in_year(year), week, "Year {year}");
        }
    }

    #[test]
    fn test_weeks_in_year_outside_range_does_not_panic() {
        assert!(matches!(weeks_in_year(-1), 52 | 53));
        assert!(matches!(weeks_in_year(10000), 52 | 53));
    }

    #[test]
    fn test_check_year_and_week() {
        assert!(check_year_and_week(0, 1).is_ok());
        assert!(check_year_and_week(2004, 53).is_ok());
        assert!(check_year_and_week(9999, 52).is_ok());

        // Year is checked before week.
        assert!(matches!(
            check_year_and_week(-1, 0),
            Err(ValidationError::InvalidYear(-1))
        ));
        assert!(matches!(
            check_year_and_week(9999, 53),
            Err(ValidationError::InvalidWeek { .. })
        ));
    }
}
