//! Spendwatch is a dashboard core for keeping an eye on card spending.
//!
//! This library provides the pieces a display layer needs to show a user's
//! card transactions over a selectable date range: a calendar date-range
//! picker, a month-grid view model, a metrics aggregation engine, a client
//! for the external transaction service, and a controller that coordinates
//! fetching so that only genuinely new ranges hit the network and stale
//! responses never overwrite newer data.

#![warn(missing_docs)]

mod calendar;
mod client;
mod config;
mod dashboard;
mod date;
mod metrics;
mod transaction;

pub use calendar::{ClickOutcome, DateRangePicker, MonthGrid, Selection};
pub use client::{Credential, TransactionClient};
pub use config::Config;
pub use dashboard::{
    DashboardController, format_currency, format_date_for_display, summary_text,
    transaction_list_text,
};
pub use date::{DateRange, default_range, format_date, last_monday, parse_date};
pub use metrics::{Metrics, compute_metrics};
pub use transaction::Transaction;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date string did not have the `YYYY-MM-DD` shape or named a day that
    /// does not exist.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error. Raised synchronously at the parsing
    /// boundary, never silently coerced.
    #[error("could not parse \"{1}\" as a calendar date: {0}")]
    InvalidDateFormat(String, String),

    /// The transaction service answered with a non-success status code.
    ///
    /// The previously displayed data should be kept; only the loading
    /// indicator stops.
    #[error("the transaction service responded with status {0}")]
    FetchFailure(u16),

    /// The transaction service could not be reached at all.
    #[error("could not reach the transaction service: {0}")]
    Network(String),

    /// The response body could not be decoded as a list of transactions.
    #[error("could not decode the transaction list: {0}")]
    InvalidResponseBody(String),

    /// A required environment variable is missing or empty.
    #[error("the environment variable '{0}' must be set")]
    MissingConfig(&'static str),
}
