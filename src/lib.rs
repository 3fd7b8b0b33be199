mod calendar;
mod codec;
mod consts;
mod prelude;
#[cfg(feature = "sqlite")]
mod sql;
mod types;

pub use codec::{decode, encode};
pub use consts::*;
#[cfg(feature = "sqlite")]
pub use sql::SqlError;
pub use types::{Week, Year, check_year_and_week, is_long_year, weeks_in_year};

use crate::prelude::*;
use std::str::FromStr;

/// An ISO 8601 week date: one of the 52 or 53 weeks of an ISO year.
///
/// Every value satisfies `0 <= year <= 9999` and `1 <= week <= weeks_in_year(year)`.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}{}{}{}", year, DATE_SEPARATOR, WEEK_DESIGNATOR, week)]
pub struct WeekDate {
    year: Year,
    week: Week,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid week {week} for year {year} (must be {}-{max})", MIN_WEEK)]
    InvalidWeek { year: i32, week: u32, max: u8 },
}

impl std::error::Error for ValidationError {}

/// Error type for decoding the canonical `YYYY-Www` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input does not have the `YYYY-Www` shape.
    #[error("Malformed week date {0:?} (expected YYYY-Www)")]
    MalformedInput(String),

    /// Input is well formed but names a week that does not exist.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl WeekDate {
    /// `0000-W01`
    pub const MIN: Self = Self {
        year: Year::MIN,
        week: Week::new_trusted(MIN_WEEK),
    };

    /// `9999-W52`
    pub const MAX: Self = Self {
        year: Year::MAX,
        week: Week::new_trusted(WEEKS_IN_SHORT_YEAR),
    };

    /// Creates a new week date from a year and a week number.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` if the year is outside 0-9999, or
    /// `ValidationError::InvalidWeek` if the week does not exist in that year.
    pub fn new(year: i32, week: u32) -> Result<Self, ValidationError> {
        let year = Year::new(year)?;
        let week = Week::new(week, year)?;
        Ok(Self { year, week })
    }

    /// Assembles a week date from parts whose pairing is already known to be valid.
    pub(crate) const fn from_trusted_parts(year: Year, week: Week) -> Self {
        Self { year, week }
    }

    /// Returns the ISO year (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the week of the ISO year (as u8 for convenience)
    pub const fn week(&self) -> u8 {
        self.week.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Week type
    pub const fn week_typed(&self) -> Week {
        self.week
    }

    /// Number of weeks in this value's ISO year
    pub const fn weeks_in_year(&self) -> u8 {
        self.year.weeks()
    }

    /// Splits into `(year, week)`.
    pub fn into_parts(self) -> (i32, u32) {
        (self.year.into(), self.week.into())
    }

    /// Returns the following week, rolling over into week 1 of the next year
    /// after the last (52nd or 53rd) week.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` when called on the last week of 9999.
    pub fn next(&self) -> Result<Self, ValidationError> {
        let (year, week) = self.into_parts();
        if self.week() >= self.weeks_in_year() {
            Self::new(year + 1, u32::from(MIN_WEEK))
        } else {
            Self::new(year, week + 1)
        }
    }

    /// Returns the preceding week, rolling back into the last week of the
    /// previous year (which has its own 52 or 53 week count).
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` when called on `0000-W01`.
    pub fn previous(&self) -> Result<Self, ValidationError> {
        let (year, week) = self.into_parts();
        if self.week() <= MIN_WEEK {
            Self::new(year - 1, u32::from(weeks_in_year(year - 1)))
        } else {
            Self::new(year, week - 1)
        }
    }
}

impl FromStr for WeekDate {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<&str> for WeekDate {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        decode(value)
    }
}

impl TryFrom<&[u8]> for WeekDate {
    type Error = DecodeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        decode(value)
    }
}

impl TryFrom<(i32, u32)> for WeekDate {
    type Error = ValidationError;

    fn try_from(value: (i32, u32)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<WeekDate> for (i32, u32) {
    fn from(value: WeekDate) -> Self {
        value.into_parts()
    }
}

impl serde::Serialize for WeekDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for WeekDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}
