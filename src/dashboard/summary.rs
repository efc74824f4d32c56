//! Plain-text rendering of the summary block and the transaction list.

use std::fmt::Write;
use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use time::{Date, Month};

use crate::{Error, date::parse_date, metrics::Metrics, transaction::Transaction};

/// Formats a currency amount with a dollar sign, thousands separators, and
/// two decimal places.
pub fn format_currency(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let number = amount.to_f64().unwrap_or(0.0);

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Renders a canonical `YYYY-MM-DD` date string for display, e.g.
/// "23 Oct 2024".
///
/// # Errors
/// Returns [Error::InvalidDateFormat] when the input is not a well-formed
/// calendar day.
pub fn format_date_for_display(date_text: &str) -> Result<String, Error> {
    parse_date(date_text).map(date_label)
}

/// Renders the metrics block the way the summary view displays it.
pub fn summary_text(metrics: &Metrics) -> String {
    let max = match metrics.max {
        Some(amount) => format_currency(amount),
        None => "-".to_owned(),
    };

    let mut text = String::from("Transaction Summary\n");
    let _ = writeln!(text, "  Total spent:  {}", format_currency(metrics.total));
    let _ = writeln!(text, "  Average:      {}", format_currency(metrics.average));
    let _ = writeln!(text, "  Maximum:      {max}");
    let _ = writeln!(text, "  ATPD:         {:.2}", metrics.avg_per_day);
    let _ = writeln!(
        text,
        "  Spent today:  {}",
        format_currency(metrics.amount_spent_today)
    );

    text
}

/// Renders the fetched transactions as one line each, in the order the
/// service returned them.
pub fn transaction_list_text(transactions: &[Transaction]) -> String {
    let mut text = String::from("Transaction List\n");

    for transaction in transactions {
        let _ = writeln!(
            text,
            "  {}  {}  {} {}",
            transaction.location,
            format_currency(transaction.amount),
            date_label(transaction.date),
            transaction.hour,
        );
    }

    text
}

fn date_label(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
