//! Calendar month view and date-range selection.
//!
//! The picker is the interaction state machine that turns day clicks into a
//! committed date range; the grid is the view-support model for whichever
//! calendar month is currently displayed. Navigating the grid never touches
//! the selection.

mod grid;
mod picker;

pub use grid::MonthGrid;
pub use picker::{ClickOutcome, DateRangePicker, Selection};
