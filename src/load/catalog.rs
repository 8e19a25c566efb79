//! Category catalog loader
//!
//! The catalog file is a JSON object mapping category names to merchant
//! lists:
//!
//! ```json
//! { "Groceries": ["Tesco", "Lidl"], "Eating out": ["Nando's"] }
//! ```
//!
//! Object order is preserved so duplicate-merchant resolution (first listing
//! wins) is deterministic across runs.

use std::path::Path;

use serde_json::Value;

use crate::error::{DashError, DashResult};
use crate::models::CategoryCatalog;

/// Load the category catalog from a JSON file
pub fn load_catalog(path: &Path) -> DashResult<CategoryCatalog> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DashError::Io(format!("cannot open catalog {}: {}", path.display(), e)))?;

    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| DashError::Catalog(format!("{}: {}", path.display(), e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| DashError::Catalog("catalog root must be a JSON object".to_string()))?;

    let mut entries: Vec<(String, Vec<String>)> = Vec::with_capacity(object.len());
    for (category, merchants) in object {
        let merchants = merchants
            .as_array()
            .ok_or_else(|| {
                DashError::Catalog(format!("category '{}' must map to an array", category))
            })?
            .iter()
            .map(|m| {
                m.as_str().map(str::to_string).ok_or_else(|| {
                    DashError::Catalog(format!(
                        "category '{}' contains a non-string merchant",
                        category
                    ))
                })
            })
            .collect::<DashResult<Vec<String>>>()?;
        entries.push((category.clone(), merchants));
    }

    let catalog = CategoryCatalog::from_entries(entries);
    log::info!(
        "loaded {} categories / {} merchants from {}",
        catalog.category_names().len(),
        catalog.merchant_count(),
        path.display()
    );

    Ok(catalog)
}
