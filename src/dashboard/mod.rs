//! Dashboard module
//!
//! Coordinates the range picker, the transaction fetch, and the metrics so
//! a display layer only has to forward events and render state. Also
//! provides the plain-text rendering used by the `summary` binary.

mod controller;
mod summary;

pub use controller::DashboardController;
pub use summary::{
    format_currency, format_date_for_display, summary_text, transaction_list_text,
};
