//! Plain-text dashboard report
//!
//! Renders the overview numbers for one period without entering the TUI.
//! Useful for scripts and for a quick glance from a shell.

use clap::Args;
use chrono::NaiveDate;

use crate::display;
use crate::error::{DashError, DashResult};
use crate::models::{Money, Month};
use crate::services::dataset::Dataset;
use crate::services::{aggregate, pacing};

/// Arguments for the `report` subcommand
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Period to report on, e.g. "June 2021" (defaults to the current month)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Restrict the top-item list to one category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Exclude holiday-tagged transactions
    #[arg(long)]
    pub no_holiday: bool,
}

/// Handle the `report` subcommand
pub fn handle_report_command(dataset: &Dataset, args: ReportArgs) -> DashResult<()> {
    let today = chrono::Local::now().date_naive();
    let report = render_report(dataset, &args, today)?;
    println!("{}", report);
    Ok(())
}

/// Render the report for a given "today" (split out for testing)
pub fn render_report(dataset: &Dataset, args: &ReportArgs, today: NaiveDate) -> DashResult<String> {
    let month = match &args.period {
        Some(label) => Month::parse(label).map_err(|e| DashError::Period(e.to_string()))?,
        None => Month::from_date(today),
    };

    if let Some(category) = &args.category {
        if !dataset.catalog().has_category(category) {
            return Err(DashError::category_not_found(category));
        }
    }

    let include_holiday = !args.no_holiday;
    let symbol = &dataset.settings().currency_symbol;
    let budgets = dataset.budgets();

    let period_txns = aggregate::filter(dataset.transactions(), Some(month), include_holiday);
    let spent = aggregate::total(&period_txns);
    let status = pacing::month_status(month, today, spent, budgets);

    let mut out = String::new();
    let title = month.label();
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
    out.push_str(&display::days_left(status.remaining_days, month));
    out.push('\n');
    out.push_str(&display::month_progress(status.progress_percent));
    out.push('\n');
    out.push_str(&display::budget_sentence(spent, budgets.overall, symbol));
    out.push('\n');
    out.push_str(&display::pacing_line(&status, symbol));
    out.push_str("\n\n");

    out.push_str("Per category spending:\n");
    for category in budgets.category_names() {
        let limit = budgets.limit_for(category).unwrap_or_default();
        let cat_spent = aggregate::category_spend(&period_txns, category);
        let percent = cat_spent.percent_of(limit);
        out.push_str(&format!(
            "  {:<16} [{}] {:>4}  {}\n",
            category,
            bar(percent, 10),
            display::percent_label(percent),
            display::spent_out_of(cat_spent, limit, symbol),
        ));
    }

    let uncategorized: Money = aggregate::category_totals(&period_txns)
        .iter()
        .filter(|ct| ct.category.is_none())
        .map(|ct| ct.total)
        .sum();
    if !uncategorized.is_zero() {
        out.push_str(&format!(
            "  {:<16} {} (counted in the overall total only)\n",
            "Uncategorized",
            uncategorized.format_with_symbol(symbol)
        ));
    }

    out.push('\n');
    match &args.category {
        Some(category) => out.push_str(&format!("Top items this period ({}):\n", category)),
        None => out.push_str("Top items this period:\n"),
    }
    let ranked_over: Vec<&crate::services::ClassifiedTransaction> = match &args.category {
        Some(category) => period_txns
            .iter()
            .copied()
            .filter(|t| t.category() == Some(category.as_str()))
            .collect(),
        None => period_txns,
    };
    let top = aggregate::top_items(&ranked_over, dataset.settings().top_items);
    if top.is_empty() {
        out.push_str("  (no transactions)\n");
    }
    for (rank, item) in top.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<24} {}\n",
            rank + 1,
            item.item,
            item.total.format_with_symbol(symbol)
        ));
    }

    Ok(out)
}

/// Text progress bar, clamped at full
fn bar(percent: u32, width: usize) -> String {
    let filled = ((percent.min(100) as usize) * width).div_ceil(100);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryCatalog, Transaction};

    fn dataset() -> Dataset {
        let catalog = CategoryCatalog::from_entries(vec![
            ("Groceries".to_string(), vec!["Tesco".to_string()]),
            ("Eating out".to_string(), vec!["Nando's".to_string()]),
        ]);
        let mut settings = Settings::default();
        settings.category_budgets = vec![
            crate::config::settings::CategoryBudget::new("Groceries", 500.0),
            crate::config::settings::CategoryBudget::new("Eating out", 550.0),
        ];
        let date = |d| NaiveDate::from_ymd_opt(2021, 6, d).unwrap();
        let ledger = vec![
            Transaction::new(date(1), "Tesco", Money::from_cents(25000)),
            Transaction::new(date(2), "Nando's", Money::from_cents(5000)),
            Transaction::with_note(date(3), "Hotel Roma", Money::from_cents(100000), "Rome"),
        ];
        Dataset::build(ledger, catalog, settings)
    }

    fn args(period: Option<&str>, no_holiday: bool) -> ReportArgs {
        ReportArgs {
            period: period.map(str::to_string),
            category: None,
            no_holiday,
        }
    }

    #[test]
    fn test_render_closed_month() {
        let today = NaiveDate::from_ymd_opt(2021, 8, 15).unwrap();
        let report = render_report(&dataset(), &args(Some("June 2021"), false), today).unwrap();
        assert!(report.contains("0 days left in June 2021"));
        assert!(report.contains("100% of the month"));
        assert!(report.contains("$250.00 spent out of $500.00"));
        assert!(report.contains("Tesco"));
    }

    #[test]
    fn test_no_holiday_excludes_tagged_spend() {
        let today = NaiveDate::from_ymd_opt(2021, 8, 15).unwrap();
        let with = render_report(&dataset(), &args(Some("June 2021"), false), today).unwrap();
        let without = render_report(&dataset(), &args(Some("June 2021"), true), today).unwrap();
        assert!(with.contains("Hotel Roma"));
        assert!(!without.contains("Hotel Roma"));
    }

    #[test]
    fn test_unknown_period_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2021, 8, 15).unwrap();
        let err = render_report(&dataset(), &args(Some("Junetember 2021"), false), today);
        assert!(matches!(err, Err(DashError::Period(_))));
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2021, 8, 15).unwrap();
        let mut a = args(Some("June 2021"), false);
        a.category = Some("Rockets".to_string());
        let err = render_report(&dataset(), &a, today);
        assert!(matches!(err, Err(DashError::NotFound { .. })));
    }

    #[test]
    fn test_bar_clamps() {
        assert_eq!(bar(0, 10), "░░░░░░░░░░");
        assert_eq!(bar(50, 10), "█████░░░░░");
        assert_eq!(bar(250, 10), "██████████");
    }
}
