//! The displayed-month view model for the calendar grid.

use time::{Date, Month};

/// The calendar month currently shown by the picker UI.
///
/// Navigation moves the displayed month only; the range selection lives in
/// [`DateRangePicker`](crate::DateRangePicker) and is never touched from
/// here, so flipping months can never trigger a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    /// The first day of the displayed month.
    anchor: Date,
}

impl MonthGrid {
    /// Creates a grid showing the month that contains `date`.
    pub fn new(date: Date) -> Self {
        Self {
            anchor: date.replace_day(1).expect("every month has a first day"),
        }
    }

    /// Every day of the displayed month, in order.
    pub fn days(&self) -> Vec<Date> {
        let year = self.anchor.year();
        let month = self.anchor.month();

        (1..=last_day_of_month(year, month))
            .map(|day| {
                Date::from_calendar_date(year, month, day).expect("day is within the month")
            })
            .collect()
    }

    /// Moves the display back one month.
    pub fn previous_month(&mut self) {
        let (year, month) = match self.anchor.month() {
            Month::January => (self.anchor.year() - 1, Month::December),
            month => (self.anchor.year(), month.previous()),
        };

        self.anchor =
            Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    }

    /// Moves the display forward one month.
    pub fn next_month(&mut self) {
        let (year, month) = match self.anchor.month() {
            Month::December => (self.anchor.year() + 1, Month::January),
            month => (self.anchor.year(), month.next()),
        };

        self.anchor =
            Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    }

    /// The heading for the displayed month, e.g. "October 2024".
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            month_name(self.anchor.month()),
            self.anchor.year()
        )
    }

    /// The column the first day falls in on a Sunday-first weekday row.
    pub fn leading_offset(&self) -> u8 {
        self.anchor.weekday().number_days_from_sunday()
    }

    /// Whether `day` belongs to the displayed month.
    pub fn contains(&self, day: Date) -> bool {
        day.year() == self.anchor.year() && day.month() == self.anchor.month()
    }

    /// Whether `day` falls outside the displayed month.
    pub fn is_outside_displayed_month(&self, day: Date) -> bool {
        !self.contains(day)
    }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}
