//! The card transaction model served by the external transaction service.

use rust_decimal::Decimal;
use time::Date;

/// A single card transaction.
///
/// Transactions are immutable once received: the service owns their content
/// and this crate only ever aggregates and displays them. `amount` is a
/// signed fixed-point value so that debits and credits survive repeated
/// aggregation without rounding drift.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The amount of money spent or earned in this transaction.
    pub amount: Decimal,
    /// The calendar day the transaction happened on.
    pub date: Date,
    /// The local time of day, display-only.
    pub hour: String,
    /// Where the transaction took place.
    pub location: String,
    /// The last digits of the card used.
    pub card_last_digits: String,
    /// The bank the card belongs to.
    pub bank_id: String,
}
