//! Transaction classification
//!
//! Pairs each ledger transaction with its spending category via the
//! merchant→category map. An unmapped merchant is a data-quality warning,
//! not an error: the transaction still counts toward overall totals, just
//! not toward any category bucket.

use crate::models::{CategoryCatalog, Transaction};

/// A transaction paired with its derived category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTransaction {
    /// The underlying ledger row
    pub transaction: Transaction,
    /// Category from the catalog, `None` for unmapped merchants
    pub category: Option<String>,
}

impl ClassifiedTransaction {
    /// Shorthand for the transaction's category as a borrowed str
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Classify every transaction against the catalog
///
/// Returns the classified ledger plus the distinct unmapped merchants in
/// first-appearance order. Each unmapped merchant is logged once.
pub fn classify(
    transactions: Vec<Transaction>,
    catalog: &CategoryCatalog,
) -> (Vec<ClassifiedTransaction>, Vec<String>) {
    let mut new_merchants: Vec<String> = Vec::new();

    let classified = transactions
        .into_iter()
        .map(|transaction| {
            let category = catalog.category_of(&transaction.item).map(str::to_string);
            if category.is_none() && !new_merchants.iter().any(|m| *m == transaction.item) {
                log::warn!("{} is a new merchant", transaction.item);
                new_merchants.push(transaction.item.clone());
            }
            ClassifiedTransaction {
                transaction,
                category,
            }
        })
        .collect();

    if new_merchants.is_empty() {
        log::info!("all merchants accounted for");
    }

    (classified, new_merchants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn txn(item: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            item,
            Money::from_cents(100),
        )
    }

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::from_entries(vec![(
            "Groceries".to_string(),
            vec!["Tesco".to_string()],
        )])
    }

    #[test]
    fn test_known_merchant_gets_category() {
        let (classified, new_merchants) = classify(vec![txn("Tesco")], &catalog());
        assert_eq!(classified[0].category(), Some("Groceries"));
        assert!(new_merchants.is_empty());
    }

    #[test]
    fn test_unmapped_merchant_is_flagged_not_fatal() {
        let (classified, new_merchants) = classify(vec![txn("Mystery Shop")], &catalog());
        assert_eq!(classified[0].category(), None);
        assert_eq!(new_merchants, vec!["Mystery Shop"]);
    }

    #[test]
    fn test_unmapped_merchant_reported_once() {
        let (_, new_merchants) = classify(
            vec![txn("Mystery Shop"), txn("Mystery Shop"), txn("Other Shop")],
            &catalog(),
        );
        assert_eq!(new_merchants, vec!["Mystery Shop", "Other Shop"]);
    }
}
