//! Merchant→category catalog
//!
//! The catalog file maps each category name to the merchant strings that
//! belong to it. At construction the listing is inverted into a single
//! merchant→category map, so classification is one lookup instead of a scan
//! over catalog iteration order. A merchant listed under more than one
//! category keeps its first listing (file order) and is flagged.

use std::collections::HashMap;

/// A merchant listed under more than one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMerchant {
    /// The merchant string
    pub merchant: String,
    /// The category that won (first listing in file order)
    pub kept: String,
    /// The later listing that was ignored
    pub ignored: String,
}

/// Static mapping from merchant strings to spending categories
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    /// Category names in catalog file order
    categories: Vec<String>,
    /// Merchant → category, first listing wins
    merchants: HashMap<String, String>,
    /// Merchants that appeared under more than one category
    duplicates: Vec<DuplicateMerchant>,
}

impl CategoryCatalog {
    /// Build a catalog from (category, merchants) entries in file order
    pub fn from_entries<I, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, M)>,
        M: IntoIterator<Item = String>,
    {
        let mut categories = Vec::new();
        let mut merchants: HashMap<String, String> = HashMap::new();
        let mut duplicates = Vec::new();

        for (category, listed) in entries {
            categories.push(category.clone());
            for merchant in listed {
                match merchants.get(&merchant) {
                    Some(kept) => duplicates.push(DuplicateMerchant {
                        merchant,
                        kept: kept.clone(),
                        ignored: category.clone(),
                    }),
                    None => {
                        merchants.insert(merchant, category.clone());
                    }
                }
            }
        }

        Self {
            categories,
            merchants,
            duplicates,
        }
    }

    /// Look up the category for a merchant string
    pub fn category_of(&self, merchant: &str) -> Option<&str> {
        self.merchants.get(merchant).map(String::as_str)
    }

    /// Category names in catalog file order
    pub fn category_names(&self) -> &[String] {
        &self.categories
    }

    /// Whether the catalog defines the given category
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Merchants that were listed under more than one category
    pub fn duplicates(&self) -> &[DuplicateMerchant] {
        &self.duplicates
    }

    /// Number of known merchants
    pub fn merchant_count(&self) -> usize {
        self.merchants.len()
    }
}
