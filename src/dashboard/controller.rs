//! The event loop state behind the dashboard view.

use time::Date;

use crate::{
    Error,
    calendar::{ClickOutcome, DateRangePicker},
    date::DateRange,
    metrics::{Metrics, compute_metrics},
    transaction::Transaction,
};

/// The user-facing message shown when a fetch fails.
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch transactions. Please try again later.";

/// Single-threaded coordinator for the dashboard.
///
/// Owns the picker, the fetched transaction list, and the derived metrics.
/// All methods run on the one logical UI thread; the only asynchronous piece
/// is the fetch itself, which the caller performs between
/// [DashboardController::click_day] handing out a range and
/// [DashboardController::apply_fetch_result] receiving the outcome.
///
/// Fetches are de-duplicated on the committed end day and keyed by the range
/// they were issued for, so a response for an abandoned range can never
/// overwrite state produced by a later request.
#[derive(Debug)]
pub struct DashboardController {
    picker: DateRangePicker,
    transactions: Vec<Transaction>,
    metrics: Metrics,
    /// The committed end day of the most recently issued fetch.
    previous_end: Option<Date>,
    /// The range the outstanding fetch was issued for, if any.
    in_flight: Option<DateRange>,
    loading: bool,
    error: Option<String>,
    today: Date,
}

impl DashboardController {
    /// Creates a controller with the default range committed and no data yet.
    pub fn new(today: Date) -> Self {
        Self {
            picker: DateRangePicker::new(today),
            transactions: Vec::new(),
            metrics: Metrics::empty(),
            previous_end: None,
            in_flight: None,
            loading: false,
            error: None,
            today,
        }
    }

    /// The fetch for the initial default range.
    ///
    /// Returns the range to fetch the first time it is called and `None`
    /// afterwards, once a fetch has been issued through any path.
    pub fn initial_fetch(&mut self) -> Option<DateRange> {
        if self.previous_end.is_some() {
            return None;
        }

        self.picker
            .committed_range()
            .map(|range| self.begin_fetch(range))
    }

    /// Feeds a calendar day click to the picker.
    ///
    /// Returns `Some(range)` when the click committed a range whose end day
    /// differs from the last fetched one; the caller must then perform the
    /// fetch and report back through [DashboardController::apply_fetch_result].
    /// Every other transition, including re-committing the same end day,
    /// yields `None` and must not hit the network.
    pub fn click_day(&mut self, day: Date) -> Option<DateRange> {
        match self.picker.click_day(day) {
            ClickOutcome::Completed(range) if self.previous_end != Some(range.end) => {
                Some(self.begin_fetch(range))
            }
            ClickOutcome::Completed(range) => {
                tracing::debug!(
                    "end day {} unchanged, skipping fetch for {range:?}",
                    range.end
                );
                None
            }
            ClickOutcome::Ignored
            | ClickOutcome::Started(_)
            | ClickOutcome::Restarted(_)
            | ClickOutcome::Cleared => None,
        }
    }

    /// Abandons an in-progress selection without fetching anything.
    pub fn cancel_selection(&mut self) {
        self.picker.cancel();
    }

    /// Applies the outcome of the fetch issued for `range`.
    ///
    /// Last committed range wins: if a newer range has been committed since
    /// this fetch was issued, the result is discarded. A failed fetch keeps
    /// the previously displayed data, stops the loading indicator, and
    /// stores a user-facing message.
    pub fn apply_fetch_result(
        &mut self,
        range: DateRange,
        result: Result<Vec<Transaction>, Error>,
    ) {
        if self.in_flight != Some(range) {
            tracing::debug!("discarding stale transaction fetch for {range:?}");
            return;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(transactions) => {
                self.metrics = compute_metrics(&transactions, self.today);
                self.transactions = transactions;
                self.error = None;
            }
            Err(error) => {
                tracing::error!("could not fetch transactions: {error}");
                self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
            }
        }
    }

    fn begin_fetch(&mut self, range: DateRange) -> DateRange {
        self.previous_end = Some(range.end);
        self.in_flight = Some(range);
        self.loading = true;
        self.error = None;

        range
    }

    /// The picker, for the calendar rendering queries.
    pub fn picker(&self) -> &DateRangePicker {
        &self.picker
    }

    /// The currently displayed transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The metrics for the currently displayed transactions.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The committed range, if the selection is complete.
    pub fn range(&self) -> Option<DateRange> {
        self.picker.committed_range()
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user-facing message for the most recent failed fetch, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
