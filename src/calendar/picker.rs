//! The date-range selection state machine behind the calendar.

use time::Date;

use crate::date::{DateRange, default_range};

/// The current state of the range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing is selected.
    Empty,
    /// A start day has been picked and the picker is waiting for an end day.
    StartOnly(Date),
    /// Both endpoints are picked; the range is committed.
    Complete(DateRange),
}

/// What a day click did to the selection.
///
/// Every transition is reported so the consumer can decide what, if
/// anything, to do about it. Only [ClickOutcome::Completed] carries a range
/// worth fetching, and even then the consumer must check whether the
/// committed end day actually changed before hitting the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was on a future day and was rejected; nothing changed.
    Ignored,
    /// A fresh selection began with the clicked day as its start.
    Started(Date),
    /// The start moved back to an earlier day; still waiting for an end.
    Restarted(Date),
    /// The start day was clicked again and the selection was cleared.
    Cleared,
    /// An end day was picked and the range is now committed.
    Completed(DateRange),
}

/// Turns a sequence of day clicks into a committed `(start, end)` range.
///
/// Two invariants hold at all times: a committed range is never reversed
/// (`start <= end`), and neither endpoint can be after today. Clicks that
/// would break them are expected user input, so they are silently rejected
/// rather than reported as errors.
#[derive(Debug, Clone)]
pub struct DateRangePicker {
    selection: Selection,
    last_complete: DateRange,
    today: Date,
}

impl DateRangePicker {
    /// Creates a picker whose initial committed range is the last Monday
    /// through `today`.
    pub fn new(today: Date) -> Self {
        let range = default_range(today);

        Self {
            selection: Selection::Complete(range),
            last_complete: range,
            today,
        }
    }

    /// Applies a click on `day` from the displayed month grid.
    pub fn click_day(&mut self, day: Date) -> ClickOutcome {
        if day > self.today {
            return ClickOutcome::Ignored;
        }

        match self.selection {
            // A new range always starts fresh once a prior one is complete.
            Selection::Empty | Selection::Complete(_) => {
                self.selection = Selection::StartOnly(day);
                ClickOutcome::Started(day)
            }
            Selection::StartOnly(start) => {
                if day < start {
                    self.selection = Selection::StartOnly(day);
                    ClickOutcome::Restarted(day)
                } else if day == start {
                    self.selection = Selection::Empty;
                    ClickOutcome::Cleared
                } else {
                    let range = DateRange { start, end: day };
                    self.selection = Selection::Complete(range);
                    self.last_complete = range;
                    ClickOutcome::Completed(range)
                }
            }
        }
    }

    /// Abandons an unfinished selection, restoring the last committed range.
    ///
    /// Called when the calendar is closed or escaped mid-selection. The
    /// initial default range counts as committed, so there is always a range
    /// to fall back to. A completed selection is left as-is.
    pub fn cancel(&mut self) {
        if !matches!(self.selection, Selection::Complete(_)) {
            self.selection = Selection::Complete(self.last_complete);
        }
    }

    /// The current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The committed range, if the selection is complete.
    pub fn committed_range(&self) -> Option<DateRange> {
        match self.selection {
            Selection::Complete(range) => Some(range),
            Selection::Empty | Selection::StartOnly(_) => None,
        }
    }

    /// The selected start day, if any.
    pub fn start(&self) -> Option<Date> {
        match self.selection {
            Selection::Empty => None,
            Selection::StartOnly(start) => Some(start),
            Selection::Complete(range) => Some(range.start),
        }
    }

    /// The selected end day, if any.
    pub fn end(&self) -> Option<Date> {
        match self.selection {
            Selection::Empty | Selection::StartOnly(_) => None,
            Selection::Complete(range) => Some(range.end),
        }
    }

    /// Whether `day` is the selected start day.
    pub fn is_start(&self, day: Date) -> bool {
        self.start() == Some(day)
    }

    /// Whether `day` is the selected end day.
    pub fn is_end(&self, day: Date) -> bool {
        self.end() == Some(day)
    }

    /// Whether `day` lies strictly between the selected start and end.
    ///
    /// Always false while either endpoint is missing.
    pub fn is_in_range(&self, day: Date) -> bool {
        match self.selection {
            Selection::Complete(range) => range.start < day && day < range.end,
            Selection::Empty | Selection::StartOnly(_) => false,
        }
    }

    /// Whether `day` is the wall-clock current day the picker was built with.
    pub fn is_today(&self, day: Date) -> bool {
        day == self.today
    }
}
