//! Summary statistics computed over a fetched transaction list.
//!
//! Metrics are recomputed wholesale every time a new transaction list
//! arrives; nothing here is patched incrementally.

use std::collections::HashSet;

use rust_decimal::Decimal;
use time::Date;

use crate::transaction::Transaction;

/// Summary statistics for a list of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// The signed sum of all transaction amounts.
    pub total: Decimal,
    /// `total / count`, or zero when the list is empty.
    pub average: Decimal,
    /// The largest single amount, or `None` when the list is empty.
    pub max: Option<Decimal>,
    /// The number of transactions per distinct calendar day, or zero when
    /// the list is empty.
    pub avg_per_day: f64,
    /// The signed sum of amounts dated on the reference "today".
    pub amount_spent_today: Decimal,
    /// The number of transactions in the list.
    pub count: usize,
}

impl Metrics {
    /// The all-zero metrics shown before any data has been fetched.
    pub fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            average: Decimal::ZERO,
            max: None,
            avg_per_day: 0.0,
            amount_spent_today: Decimal::ZERO,
            count: 0,
        }
    }
}

/// Computes summary statistics over `transactions`.
///
/// `reference_today` is the wall-clock current day; the spent-today figure
/// always reflects it, independent of whichever range the transactions were
/// fetched for. When today falls outside the fetched window the figure is
/// simply zero because no transaction carries today's date.
///
/// Pure and deterministic: calling it again with the same input yields the
/// same output.
pub fn compute_metrics(transactions: &[Transaction], reference_today: Date) -> Metrics {
    let count = transactions.len();
    let total: Decimal = transactions.iter().map(|transaction| transaction.amount).sum();

    let average = if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    };

    let max = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .max();

    let distinct_days: HashSet<Date> = transactions
        .iter()
        .map(|transaction| transaction.date)
        .collect();

    let avg_per_day = if distinct_days.is_empty() {
        0.0
    } else {
        count as f64 / distinct_days.len() as f64
    };

    let amount_spent_today = transactions
        .iter()
        .filter(|transaction| transaction.date == reference_today)
        .map(|transaction| transaction.amount)
        .sum();

    Metrics {
        total,
        average,
        max,
        avg_per_day,
        amount_spent_today,
        count,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use super::{Metrics, compute_metrics};
    use crate::transaction::Transaction;

    fn create_test_transaction(amount: i64, date: time::Date) -> Transaction {
        Transaction {
            amount: Decimal::from(amount),
            date,
            hour: "12:00".to_owned(),
            location: "Cafe".to_owned(),
            card_last_digits: "1234".to_owned(),
            bank_id: "bank-1".to_owned(),
        }
    }

    #[test]
    fn empty_list_yields_zeroed_metrics() {
        let metrics = compute_metrics(&[], date!(2024 - 01 - 02));

        assert_eq!(metrics, Metrics::empty());
        assert_eq!(metrics.max, None);
    }

    #[test]
    fn sums_and_averages_across_days() {
        let transactions = vec![
            create_test_transaction(100, date!(2024 - 01 - 01)),
            create_test_transaction(300, date!(2024 - 01 - 01)),
            create_test_transaction(200, date!(2024 - 01 - 02)),
        ];

        let metrics = compute_metrics(&transactions, date!(2024 - 01 - 05));

        assert_eq!(metrics.total, Decimal::from(600));
        assert_eq!(metrics.average, Decimal::from(200));
        assert_eq!(metrics.max, Some(Decimal::from(300)));
        assert_eq!(metrics.avg_per_day, 1.5);
        assert_eq!(metrics.count, 3);
    }

    #[test]
    fn single_transaction_has_equal_total_average_and_max() {
        let transactions = vec![create_test_transaction(450, date!(2024 - 01 - 01))];

        let metrics = compute_metrics(&transactions, date!(2024 - 01 - 02));

        assert_eq!(metrics.total, Decimal::from(450));
        assert_eq!(metrics.average, metrics.total);
        assert_eq!(metrics.max, Some(metrics.total));
    }

    #[test]
    fn all_transactions_on_one_day_average_to_the_count() {
        let transactions = vec![
            create_test_transaction(10, date!(2024 - 01 - 01)),
            create_test_transaction(20, date!(2024 - 01 - 01)),
            create_test_transaction(30, date!(2024 - 01 - 01)),
            create_test_transaction(40, date!(2024 - 01 - 01)),
        ];

        let metrics = compute_metrics(&transactions, date!(2024 - 01 - 02));

        assert_eq!(metrics.avg_per_day, 4.0);
    }

    #[test]
    fn total_preserves_the_sign_of_credits() {
        let transactions = vec![
            create_test_transaction(100, date!(2024 - 01 - 01)),
            create_test_transaction(-40, date!(2024 - 01 - 02)),
        ];

        let metrics = compute_metrics(&transactions, date!(2024 - 01 - 05));

        assert_eq!(metrics.total, Decimal::from(60));
        assert_eq!(metrics.max, Some(Decimal::from(100)));
    }

    #[test]
    fn spent_today_only_counts_transactions_dated_today() {
        let today = date!(2024 - 01 - 02);
        let transactions = vec![
            create_test_transaction(100, date!(2024 - 01 - 01)),
            create_test_transaction(250, today),
            create_test_transaction(-50, today),
            create_test_transaction(999, date!(2024 - 01 - 03)),
        ];

        let metrics = compute_metrics(&transactions, today);

        assert_eq!(metrics.amount_spent_today, Decimal::from(200));
    }

    #[test]
    fn spent_today_is_zero_when_today_is_outside_the_fetched_window() {
        let transactions = vec![create_test_transaction(100, date!(2024 - 01 - 01))];

        let metrics = compute_metrics(&transactions, date!(2024 - 02 - 01));

        assert_eq!(metrics.amount_spent_today, Decimal::ZERO);
    }

    #[test]
    fn average_of_inexact_division_stays_exact_in_decimal() {
        let transactions = vec![
            create_test_transaction(1, date!(2024 - 01 - 01)),
            create_test_transaction(2, date!(2024 - 01 - 01)),
        ];

        let metrics = compute_metrics(&transactions, date!(2024 - 01 - 02));

        assert_eq!(metrics.average, Decimal::new(15, 1));
    }
}
