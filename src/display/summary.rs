//! Presenter strings
//!
//! Pure formatting from aggregates to display text. No aggregation happens
//! here; these functions are the only boundary the TUI and the plain-text
//! report go through.

use crate::models::{Money, Month};
use crate::services::MonthStatus;

/// "$367.89 spent out of $550.00"
pub fn spent_out_of(spent: Money, limit: Money, symbol: &str) -> String {
    format!(
        "{} spent out of {}",
        spent.format_with_symbol(symbol),
        limit.format_with_symbol(symbol)
    )
}

/// "12 days left in June 2021"
pub fn days_left(remaining_days: u32, month: Month) -> String {
    format!("{} days left in {}", remaining_days, month.label())
}

/// "60% of the month"
pub fn month_progress(progress_percent: u32) -> String {
    format!("{}% of the month", progress_percent)
}

/// "66%"
pub fn percent_label(percent: u32) -> String {
    format!("{}%", percent)
}

/// "You've spent 58% of your budget ($876.54 out of $1500.00)"
pub fn budget_sentence(spent: Money, overall: Money, symbol: &str) -> String {
    format!(
        "You've spent {}% of your budget ({} out of {})",
        spent.percent_of(overall),
        spent.format_with_symbol(symbol),
        overall.format_with_symbol(symbol)
    )
}

/// "Total spending: $2345.67"
pub fn holiday_total(total: Money, symbol: &str) -> String {
    format!("Total spending: {}", total.format_with_symbol(symbol))
}

/// "Projected: $1450.00 (on track)" or "Final: $1500.00 (warning)"
pub fn pacing_line(status: &MonthStatus, symbol: &str) -> String {
    match status.projected {
        Some(projected) => format!(
            "Projected: {} ({})",
            projected.format_with_symbol(symbol),
            status.severity.label()
        ),
        None => format!(
            "Final: {} ({})",
            status.spent.format_with_symbol(symbol),
            status.severity.label()
        ),
    }
}
