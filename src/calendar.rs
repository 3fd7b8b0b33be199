//! Conversions between [`WeekDate`] and chrono calendar dates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::consts::WEEKS_IN_LONG_YEAR;
use crate::types::{Week, Year, weeks_in_year};
use crate::{ValidationError, WeekDate};

impl WeekDate {
    /// Returns the ISO week containing `date`.
    ///
    /// Trust boundary: the week number comes from chrono's own ISO 8601
    /// week-numbering and is accepted without re-validation, since chrono
    /// always yields `1..=weeks_in_year(iso_year)`. chrono's year range is
    /// far wider than four digits though, so the ISO year is still range
    /// checked.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` if the ISO year of `date` is outside 0-9999.
    pub fn from_calendar_date(date: &impl Datelike) -> Result<Self, ValidationError> {
        let iso = date.iso_week();
        let year = Year::new(iso.year())?;

        debug_assert!(iso.week() >= 1 && iso.week() <= u32::from(weeks_in_year(iso.year())));
        #[allow(clippy::cast_possible_truncation)]
        let week = Week::new_trusted(iso.week().min(u32::from(WEEKS_IN_LONG_YEAR)) as u8);

        Ok(Self::from_trusted_parts(year, week))
    }

    /// Returns the calendar date of `weekday` within this week.
    ///
    /// `None` only if chrono cannot represent the date, which does not
    /// happen for years 0-9999.
    pub fn date(&self, weekday: Weekday) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(i32::from(self.year()), u32::from(self.week()), weekday)
    }

    /// Monday of this week
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.date(Weekday::Mon)
    }

    /// Sunday of this week
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.date(Weekday::Sun)
    }
}

impl TryFrom<NaiveDate> for WeekDate {
    type Error = ValidationError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_calendar_date(&date)
    }
}

impl TryFrom<NaiveDateTime> for WeekDate {
    type Error = ValidationError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_calendar_date(&datetime.date())
    }
}

/// Uses the local date of `datetime` in its own time zone; time of day is dropped.
impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for WeekDate {
    type Error = ValidationError;

    fn try_from(datetime: DateTime<Tz>) -> Result<Self, Self::Error> {
        Self::from_calendar_date(&datetime.date_naive())
    }
}
