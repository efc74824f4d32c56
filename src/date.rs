//! Date parsing, formatting, and week helpers shared across the crate.

use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The canonical `YYYY-MM-DD` calendar-day format used on the wire and in
/// query parameters.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// An inclusive range of calendar days.
///
/// Both endpoints are always present and `start <= end`; an in-progress
/// selection with a missing endpoint is represented by
/// [`Selection`](crate::Selection) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day of the range.
    pub start: Date,
    /// The last day of the range.
    pub end: Date,
}

/// Parse a calendar day in the canonical `YYYY-MM-DD` form.
///
/// The shape check is strict: components must be zero-padded, the day must
/// exist in its month, and trailing characters are rejected.
///
/// # Errors
/// Returns [Error::InvalidDateFormat] with the offending string when the
/// input does not parse.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|error| Error::InvalidDateFormat(error.to_string(), text.to_owned()))
}

/// Format a calendar day in the canonical `YYYY-MM-DD` form.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// The Monday strictly before `date` if `date` is itself a Monday, otherwise
/// the Monday of `date`'s own week (weeks start on Monday).
pub fn last_monday(date: Date) -> Date {
    let weekday_number = date.weekday().number_from_monday() as i64;

    if weekday_number == 1 {
        date - Duration::days(7)
    } else {
        date - Duration::days(weekday_number - 1)
    }
}

/// The range shown on first load: the last Monday through today.
pub fn default_range(today: Date) -> DateRange {
    DateRange {
        start: last_monday(today),
        end: today,
    }
}
