//! User settings for findash
//!
//! Budget ceilings, display preferences, and aggregation parameters. All
//! fields have defaults so a missing settings file yields the stock
//! dashboard configuration.

use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::{DashError, DashResult};

/// A monthly spending ceiling for one category
///
/// Kept as a list entry rather than a map key so the settings file order
/// drives the display order of the category widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Category name, matching a key of the category catalog
    pub name: String,
    /// Monthly ceiling in currency units (e.g. 550.0)
    pub limit: f64,
}

impl CategoryBudget {
    /// Create a new category budget entry
    pub fn new(name: impl Into<String>, limit: f64) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }
}

/// User settings for findash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Overall monthly budget ceiling in currency units
    #[serde(default = "default_budget")]
    pub budget: f64,

    /// Warning ceiling for projected spend (above budget, below "over")
    #[serde(default = "default_warning")]
    pub warning: f64,

    /// Currency symbol used in every formatted amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of recent months shown in period aggregation and the timeline
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Number of entries in the ranked top-item lists
    #[serde(default = "default_top_items")]
    pub top_items: usize,

    /// Per-category monthly ceilings, in display order
    #[serde(default = "default_category_budgets")]
    pub category_budgets: Vec<CategoryBudget>,

    /// Categories hidden from the timeline category selector
    #[serde(default = "default_excluded_categories")]
    pub excluded_categories: Vec<String>,

    /// Accepted ledger date formats, tried in order (strftime syntax)
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_budget() -> f64 {
    1500.0
}

fn default_warning() -> f64 {
    1600.0
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_window_size() -> usize {
    12
}

fn default_top_items() -> usize {
    5
}

fn default_category_budgets() -> Vec<CategoryBudget> {
    vec![
        CategoryBudget::new("Eating out", 550.0),
        CategoryBudget::new("Groceries", 500.0),
        CategoryBudget::new("Transport", 100.0),
        CategoryBudget::new("Entertainment", 100.0),
        CategoryBudget::new("Misc.", 250.0),
    ]
}

fn default_excluded_categories() -> Vec<String> {
    vec!["Holiday".to_string()]
}

fn default_date_formats() -> Vec<String> {
    vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            warning: default_warning(),
            currency_symbol: default_currency(),
            window_size: default_window_size(),
            top_items: default_top_items(),
            category_budgets: default_category_budgets(),
            excluded_categories: default_excluded_categories(),
            date_formats: default_date_formats(),
        }
    }
}

impl Settings {
    /// Load settings from the settings file, falling back to defaults when
    /// the file does not exist
    ///
    /// A present but malformed settings file is an error; silently running
    /// with the wrong budget ceilings would be worse than stopping.
    pub fn load_or_default(paths: &DashPaths) -> DashResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| DashError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(settings)
    }
}
