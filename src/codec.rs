//! The canonical `YYYY-Www` text encoding.

use crate::consts::{DATE_SEPARATOR, ENCODED_LEN, WEEK_DESIGNATOR, WEEK_DIGITS, YEAR_DIGITS};
use crate::{DecodeError, ValidationError, WeekDate};

/// Validates `(year, week)` and encodes it as `YYYY-Www`.
///
/// # Errors
/// Returns the same `ValidationError` as [`WeekDate::new`].
pub fn encode(year: i32, week: u32) -> Result<String, ValidationError> {
    WeekDate::new(year, week).map(|date| date.to_string())
}

/// Decodes exactly 8 bytes of `YYYY-Www` into a week date.
///
/// # Errors
/// Returns `DecodeError::MalformedInput` if the input does not have the
/// `YYYY-Www` shape, or `DecodeError::Invalid` if it is well formed but the
/// year or week is out of range (e.g. `2003-W53`).
pub fn decode(input: impl AsRef<[u8]>) -> Result<WeekDate, DecodeError> {
    let input = input.as_ref();
    let malformed = || DecodeError::MalformedInput(String::from_utf8_lossy(input).into_owned());

    if input.len() != ENCODED_LEN {
        return Err(malformed());
    }

    let (year, rest) = input.split_at(YEAR_DIGITS);
    let (designator, week) = rest.split_at(ENCODED_LEN - YEAR_DIGITS - WEEK_DIGITS);
    if designator != [DATE_SEPARATOR as u8, WEEK_DESIGNATOR as u8] {
        return Err(malformed());
    }

    let year = parse_digits(year).ok_or_else(malformed)?;
    let week = parse_digits(week).ok_or_else(malformed)?;

    Ok(WeekDate::new(i32::from(year), u32::from(week))?)
}

/// Parses a short run of ASCII digits. Signs and whitespace are rejected.
fn parse_digits(digits: &[u8]) -> Option<u16> {
    digits.iter().try_fold(0u16, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
    })
}
