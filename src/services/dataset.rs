//! The in-memory dataset
//!
//! `Dataset` is the immutable handle produced by the explicit initialization
//! step: ledger loaded, transactions classified, budgets resolved, and every
//! load-time diagnostic collected. All aggregation and presentation takes
//! the handle by reference; nothing reads the flat files after this point.

use std::fmt;

use crate::config::paths::DashPaths;
use crate::config::settings::Settings;
use crate::error::DashResult;
use crate::load::{load_catalog, load_ledger};
use crate::models::{BudgetTable, CategoryCatalog, Money, Transaction};

use super::classify::{classify, ClassifiedTransaction};

/// A non-fatal data-quality finding from load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A ledger merchant missing from the catalog
    NewMerchant { merchant: String },
    /// A merchant listed under more than one catalog category
    DuplicateMerchant {
        merchant: String,
        kept: String,
        ignored: String,
    },
    /// Category ceilings exceeding the overall ceiling
    OverAllocated { excess: Money },
    /// A budgeted category missing from the catalog
    UnknownBudgetCategory { category: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NewMerchant { merchant } => {
                write!(f, "{} is a new merchant", merchant)
            }
            Diagnostic::DuplicateMerchant {
                merchant,
                kept,
                ignored,
            } => write!(
                f,
                "merchant '{}' listed under both '{}' and '{}'; keeping '{}'",
                merchant, kept, ignored, kept
            ),
            Diagnostic::OverAllocated { excess } => write!(
                f,
                "category budgets exceed the overall budget by {}",
                excess
            ),
            Diagnostic::UnknownBudgetCategory { category } => {
                write!(f, "budgeted category '{}' is not in the catalog", category)
            }
        }
    }
}

/// Immutable in-memory dataset: the classified ledger plus its context
#[derive(Debug, Clone)]
pub struct Dataset {
    transactions: Vec<ClassifiedTransaction>,
    catalog: CategoryCatalog,
    budgets: BudgetTable,
    settings: Settings,
    diagnostics: Vec<Diagnostic>,
}

impl Dataset {
    /// Load and classify everything from the flat files
    ///
    /// Fails fast on a malformed ledger or catalog; data-quality findings
    /// (new merchants, duplicate listings, budget misallocation) are logged
    /// and collected, never fatal.
    pub fn load(paths: &DashPaths, settings: &Settings) -> DashResult<Self> {
        let ledger = load_ledger(&paths.ledger_file(), &settings.date_formats)?;
        let catalog = load_catalog(&paths.catalog_file())?;
        Ok(Self::build(ledger, catalog, settings.clone()))
    }

    /// Build a dataset from already-loaded parts (used by tests and the
    /// `check` subcommand)
    pub fn build(ledger: Vec<Transaction>, catalog: CategoryCatalog, settings: Settings) -> Self {
        let budgets = BudgetTable::from_settings(&settings);
        let (transactions, new_merchants) = classify(ledger, &catalog);

        let mut diagnostics: Vec<Diagnostic> = new_merchants
            .into_iter()
            .map(|merchant| Diagnostic::NewMerchant { merchant })
            .collect();

        for dup in catalog.duplicates() {
            log::warn!(
                "merchant '{}' listed under both '{}' and '{}'",
                dup.merchant,
                dup.kept,
                dup.ignored
            );
            diagnostics.push(Diagnostic::DuplicateMerchant {
                merchant: dup.merchant.clone(),
                kept: dup.kept.clone(),
                ignored: dup.ignored.clone(),
            });
        }

        if let Some(excess) = budgets.over_allocation() {
            log::warn!("budget allocation incorrect: category ceilings exceed overall by {}", excess);
            diagnostics.push(Diagnostic::OverAllocated { excess });
        }

        for category in budgets.category_names() {
            if !catalog.has_category(category) {
                log::warn!("budgeted category '{}' is not in the catalog", category);
                diagnostics.push(Diagnostic::UnknownBudgetCategory {
                    category: category.to_string(),
                });
            }
        }

        Self {
            transactions,
            catalog,
            budgets,
            settings,
            diagnostics,
        }
    }

    /// The classified ledger in file order
    pub fn transactions(&self) -> &[ClassifiedTransaction] {
        &self.transactions
    }

    /// The category catalog
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Budget ceilings
    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// The settings the dataset was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load-time diagnostics in detection order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Categories offered by the timeline selector: catalog order, minus the
    /// excluded ones (holiday-style categories have no monthly ceiling to
    /// plot against)
    pub fn selectable_categories(&self) -> Vec<&str> {
        self.catalog
            .category_names()
            .iter()
            .map(String::as_str)
            .filter(|name| !self.settings.excluded_categories.iter().any(|e| e == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::from_entries(vec![
            ("Groceries".to_string(), vec!["Tesco".to_string(), "Lidl".to_string()]),
            ("Eating out".to_string(), vec!["Nando's".to_string()]),
            ("Transport".to_string(), vec!["TfL".to_string()]),
            ("Entertainment".to_string(), vec!["Cinema".to_string()]),
            ("Misc.".to_string(), vec!["Boots".to_string()]),
            ("Holiday".to_string(), vec!["Hotel Roma".to_string()]),
        ])
    }

    fn txn(item: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            item,
            Money::from_cents(1000),
        )
    }

    #[test]
    fn test_build_collects_new_merchant_diagnostics() {
        let dataset = Dataset::build(
            vec![txn("Tesco"), txn("Mystery Shop")],
            catalog(),
            Settings::default(),
        );
        assert_eq!(
            dataset.diagnostics(),
            &[Diagnostic::NewMerchant {
                merchant: "Mystery Shop".to_string()
            }]
        );
    }

    #[test]
    fn test_build_flags_over_allocation() {
        let mut settings = Settings::default();
        settings.budget = 100.0;
        let dataset = Dataset::build(vec![txn("Tesco")], catalog(), settings);
        assert!(dataset
            .diagnostics()
            .iter()
            .any(|d| matches!(d, Diagnostic::OverAllocated { .. })));
    }

    #[test]
    fn test_build_flags_budget_category_missing_from_catalog() {
        let catalog = CategoryCatalog::from_entries(vec![(
            "Groceries".to_string(),
            vec!["Tesco".to_string()],
        )]);
        let dataset = Dataset::build(vec![txn("Tesco")], catalog, Settings::default());
        assert!(dataset.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::UnknownBudgetCategory { category } if category == "Eating out"
        )));
    }

    #[test]
    fn test_selectable_categories_exclude_holiday() {
        let dataset = Dataset::build(vec![txn("Tesco")], catalog(), Settings::default());
        assert_eq!(
            dataset.selectable_categories(),
            vec!["Groceries", "Eating out", "Transport", "Entertainment", "Misc."]
        );
    }

    #[test]
    fn test_clean_dataset_has_no_diagnostics() {
        let dataset = Dataset::build(
            vec![txn("Tesco"), txn("Nando's")],
            catalog(),
            Settings::default(),
        );
        assert!(dataset.diagnostics().is_empty());
    }
}
