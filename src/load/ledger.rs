//! Ledger CSV loader
//!
//! Reads the transaction ledger: columns `Date,Item,Price,Notes`. A blank
//! `Date` is a continuation row and forward-fills from the previous row; a
//! blank date on the first row has nothing to fill from and is an error.

use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;

use crate::error::{DashError, DashResult};
use crate::models::{Money, Transaction};

/// Resolved column indexes for the ledger header
struct LedgerColumns {
    date: usize,
    item: usize,
    price: usize,
    notes: Option<usize>,
}

impl LedgerColumns {
    fn from_headers(headers: &csv::StringRecord) -> DashResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let required = |name: &'static str| {
            find(name).ok_or_else(|| {
                DashError::ledger_row(1, format!("missing required column '{}'", name))
            })
        };

        Ok(Self {
            date: required("Date")?,
            item: required("Item")?,
            price: required("Price")?,
            notes: find("Notes"),
        })
    }
}

/// Load the transaction ledger from a CSV file
///
/// Returns transactions in file order with dates forward-filled.
pub fn load_ledger(path: &Path, date_formats: &[String]) -> DashResult<Vec<Transaction>> {
    let mut reader = Reader::from_path(path).map_err(|e| {
        DashError::Io(format!("cannot open ledger {}: {}", path.display(), e))
    })?;

    let columns = LedgerColumns::from_headers(reader.headers()?)?;

    let mut transactions = Vec::new();
    let mut last_date: Option<NaiveDate> = None;

    // Row numbers are 1-based and count the header, matching what a user
    // sees in a spreadsheet.
    for (index, record) in reader.records().enumerate() {
        let row = index + 2;
        let record = record?;

        let field = |column: usize| record.get(column).unwrap_or("").trim();

        let date_field = field(columns.date);
        let date = if date_field.is_empty() {
            last_date.ok_or_else(|| {
                DashError::ledger_row(row, "blank date with no previous row to fill from")
            })?
        } else {
            parse_date(date_field, date_formats)
                .ok_or_else(|| DashError::ledger_row(row, format!("unparseable date '{}'", date_field)))?
        };
        last_date = Some(date);

        let item = field(columns.item);
        if item.is_empty() {
            return Err(DashError::ledger_row(row, "blank item"));
        }

        let price_field = field(columns.price);
        let price = Money::parse(price_field)
            .map_err(|e| DashError::ledger_row(row, e.to_string()))?;

        let note = columns
            .notes
            .map(|c| field(c))
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        transactions.push(Transaction {
            date,
            item: item.to_string(),
            price,
            note,
        });
    }

    log::info!(
        "loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );

    Ok(transactions)
}

fn parse_date(s: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]
    }

    fn write_ledger(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_basic_ledger() {
        let file = write_ledger(
            "Date,Item,Price,Notes\n\
             2021-06-01,Tesco,23.50,\n\
             2021-06-02,Nando's,15.00,\n",
        );
        let txns = load_ledger(file.path(), &formats()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].item, "Tesco");
        assert_eq!(txns[0].price, Money::from_cents(2350));
        assert_eq!(txns[0].note, None);
    }

    #[test]
    fn test_forward_fill_dates() {
        let file = write_ledger(
            "Date,Item,Price,Notes\n\
             2021-06-01,Tesco,10.00,\n\
             ,Lidl,5.00,\n\
             ,Aldi,2.00,\n\
             2021-06-03,Tesco,1.00,\n",
        );
        let txns = load_ledger(file.path(), &formats()).unwrap();
        assert_eq!(txns[1].date, txns[0].date);
        assert_eq!(txns[2].date, txns[0].date);
        assert_eq!(txns[3].date, NaiveDate::from_ymd_opt(2021, 6, 3).unwrap());
    }

    #[test]
    fn test_blank_date_on_first_row_fails() {
        let file = write_ledger("Date,Item,Price,Notes\n,Tesco,10.00,\n");
        let err = load_ledger(file.path(), &formats()).unwrap_err();
        assert!(matches!(err, DashError::Ledger { row: 2, .. }));
    }

    #[test]
    fn test_malformed_price_fails_fast() {
        let file = write_ledger(
            "Date,Item,Price,Notes\n\
             2021-06-01,Tesco,10.00,\n\
             2021-06-02,Lidl,ten,\n",
        );
        let err = load_ledger(file.path(), &formats()).unwrap_err();
        assert!(matches!(err, DashError::Ledger { row: 3, .. }));
    }

    #[test]
    fn test_non_ascii_price_fails_fast() {
        let file = write_ledger(
            "Date,Item,Price,Notes\n\
             2021-06-01,Tesco,1.€,\n",
        );
        let err = load_ledger(file.path(), &formats()).unwrap_err();
        assert!(matches!(err, DashError::Ledger { row: 2, .. }));
    }

    #[test]
    fn test_malformed_date_fails_fast() {
        let file = write_ledger("Date,Item,Price,Notes\nJune 1st,Tesco,10.00,\n");
        assert!(load_ledger(file.path(), &formats()).is_err());
    }

    #[test]
    fn test_fallback_date_format() {
        let file = write_ledger("Date,Item,Price,Notes\n01/06/2021,Tesco,10.00,\n");
        let txns = load_ledger(file.path(), &formats()).unwrap();
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2021, 6, 1).unwrap());
    }

    #[test]
    fn test_notes_column_optional() {
        let file = write_ledger("Date,Item,Price\n2021-06-01,Tesco,10.00\n");
        let txns = load_ledger(file.path(), &formats()).unwrap();
        assert_eq!(txns[0].note, None);
    }

    #[test]
    fn test_note_preserved() {
        let file = write_ledger(
            "Date,Item,Price,Notes\n2021-06-01,Hotel Roma,120.00,Rome trip\n",
        );
        let txns = load_ledger(file.path(), &formats()).unwrap();
        assert_eq!(txns[0].note.as_deref(), Some("Rome trip"));
    }

    #[test]
    fn test_missing_column_fails() {
        let file = write_ledger("Date,Merchant,Price\n2021-06-01,Tesco,10.00\n");
        assert!(load_ledger(file.path(), &formats()).is_err());
    }
}
