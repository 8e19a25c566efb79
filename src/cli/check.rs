//! Data-quality check
//!
//! Loads the flat files and prints every load-time diagnostic: new
//! merchants, duplicate catalog listings, and budget misallocation. Load
//! failures (malformed rows) propagate as errors; diagnostics do not.

use crate::error::DashResult;
use crate::services::dataset::Dataset;

/// Handle the `check` subcommand
pub fn handle_check_command(dataset: &Dataset) -> DashResult<()> {
    println!("{}", render_check(dataset));
    Ok(())
}

/// Render the check summary (split out for testing)
pub fn render_check(dataset: &Dataset) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} transactions, {} categories, {} known merchants\n",
        dataset.transactions().len(),
        dataset.catalog().category_names().len(),
        dataset.catalog().merchant_count(),
    ));

    if dataset.diagnostics().is_empty() {
        out.push_str("All merchants accounted for\n");
    } else {
        for diagnostic in dataset.diagnostics() {
            out.push_str(&format!("warning: {}\n", diagnostic));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryCatalog, Money, Transaction};
    use chrono::NaiveDate;

    fn txn(item: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            item,
            Money::from_cents(1000),
        )
    }

    fn full_catalog() -> CategoryCatalog {
        CategoryCatalog::from_entries(vec![
            ("Groceries".to_string(), vec!["Tesco".to_string()]),
            ("Eating out".to_string(), vec!["Nando's".to_string()]),
            ("Transport".to_string(), vec!["TfL".to_string()]),
            ("Entertainment".to_string(), vec!["Cinema".to_string()]),
            ("Misc.".to_string(), vec!["Boots".to_string()]),
        ])
    }

    #[test]
    fn test_clean_check() {
        let dataset = Dataset::build(vec![txn("Tesco")], full_catalog(), Settings::default());
        let out = render_check(&dataset);
        assert!(out.contains("All merchants accounted for"));
    }

    #[test]
    fn test_new_merchant_reported() {
        let dataset = Dataset::build(
            vec![txn("Mystery Shop")],
            full_catalog(),
            Settings::default(),
        );
        let out = render_check(&dataset);
        assert!(out.contains("warning: Mystery Shop is a new merchant"));
        assert!(!out.contains("All merchants accounted for"));
    }
}
