//! Budget ceilings
//!
//! The budget table carries one overall monthly ceiling, a warning ceiling
//! for projected spend, and a per-category ceiling for each budgeted
//! category. Category order follows the settings file and drives widget
//! order in the UI.

use crate::config::settings::Settings;

use super::money::Money;

/// Monthly budget ceilings, overall and per category
#[derive(Debug, Clone)]
pub struct BudgetTable {
    /// Overall monthly ceiling
    pub overall: Money,
    /// Warning ceiling for projected spend (above `overall`)
    pub warning: Money,
    /// Per-category ceilings in display order
    categories: Vec<(String, Money)>,
}

impl BudgetTable {
    /// Build the budget table from settings values
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            overall: Money::from_major(settings.budget),
            warning: Money::from_major(settings.warning),
            categories: settings
                .category_budgets
                .iter()
                .map(|cb| (cb.name.clone(), Money::from_major(cb.limit)))
                .collect(),
        }
    }

    /// The ceiling for a category, if one is configured
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, limit)| *limit)
    }

    /// Budgeted category names in display order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    /// Sum of the per-category ceilings
    pub fn allocated(&self) -> Money {
        self.categories.iter().map(|(_, limit)| *limit).sum()
    }

    /// Amount by which category ceilings exceed the overall ceiling, if any
    ///
    /// Checked, not enforced: the caller logs this as a misconfiguration
    /// warning at load time and carries on.
    pub fn over_allocation(&self) -> Option<Money> {
        let allocated = self.allocated();
        if allocated > self.overall {
            Some(allocated - self.overall)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::CategoryBudget;

    fn table(overall: f64, limits: &[(&str, f64)]) -> BudgetTable {
        let mut settings = Settings::default();
        settings.budget = overall;
        settings.category_budgets = limits
            .iter()
            .map(|(name, limit)| CategoryBudget::new(*name, *limit))
            .collect();
        BudgetTable::from_settings(&settings)
    }

    #[test]
    fn test_default_allocation_is_within_budget() {
        let table = BudgetTable::from_settings(&Settings::default());
        assert_eq!(table.overall, Money::from_major(1500.0));
        assert_eq!(table.allocated(), Money::from_major(1500.0));
        assert_eq!(table.over_allocation(), None);
    }

    #[test]
    fn test_over_allocation() {
        let table = table(1000.0, &[("Groceries", 700.0), ("Transport", 400.0)]);
        assert_eq!(table.over_allocation(), Some(Money::from_major(100.0)));
    }

    #[test]
    fn test_limit_lookup() {
        let table = table(1000.0, &[("Groceries", 700.0)]);
        assert_eq!(table.limit_for("Groceries"), Some(Money::from_major(700.0)));
        assert_eq!(table.limit_for("Holiday"), None);
    }

    #[test]
    fn test_category_order() {
        let table = table(1000.0, &[("B", 1.0), ("A", 2.0)]);
        let names: Vec<&str> = table.category_names().collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
