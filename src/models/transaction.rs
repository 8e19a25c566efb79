//! Ledger transaction model
//!
//! A transaction is one row of the ledger CSV: date, merchant, price, and an
//! optional free-text note used to tag holiday/trip groupings. Transactions
//! are immutable once loaded; category, month, and period label are derived
//! downstream, never stored back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::Month;
use super::money::Money;

/// One row of the transaction ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (forward-filled at load for continuation rows)
    pub date: NaiveDate,
    /// Merchant string, the classification key
    pub item: String,
    /// Amount spent
    pub price: Money,
    /// Optional note; a non-empty note places the transaction in a holiday group
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, item: impl Into<String>, price: Money) -> Self {
        Self {
            date,
            item: item.into(),
            price,
            note: None,
        }
    }

    /// Create a new transaction with a holiday note
    pub fn with_note(date: NaiveDate, item: impl Into<String>, price: Money, note: impl Into<String>) -> Self {
        Self {
            date,
            item: item.into(),
            price,
            note: Some(note.into()),
        }
    }

    /// The calendar month this transaction falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Whether this transaction belongs to a holiday group
    pub fn is_holiday(&self) -> bool {
        self.note.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_derivation() {
        let txn = Transaction::new(date(2021, 6, 15), "Tesco", Money::from_cents(1234));
        assert_eq!(txn.month(), Month::new(2021, 6));
    }

    #[test]
    fn test_holiday_flag() {
        let plain = Transaction::new(date(2021, 6, 15), "Tesco", Money::from_cents(100));
        let tagged =
            Transaction::with_note(date(2021, 6, 15), "Hotel", Money::from_cents(100), "Rome");
        assert!(!plain.is_holiday());
        assert!(tagged.is_holiday());
        assert_eq!(tagged.note.as_deref(), Some("Rome"));
    }
}
