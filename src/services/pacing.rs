//! Budget pacing
//!
//! Projects end-of-month spend from the days elapsed so far and classifies
//! the result against the budget and warning ceilings. A closed month is
//! judged on its actual total instead of a projection, and a closed month
//! that landed exactly on the budget is a warning, not on-track. The
//! asymmetry is deliberate: hitting the ceiling to the cent is not the same
//! as finishing under it.

use chrono::{Datelike, NaiveDate};

use crate::models::{BudgetTable, Money, Month};

/// Severity tier for budget consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// At or under the budget ceiling
    OnTrack,
    /// Between the budget and warning ceilings
    Warning,
    /// Above the warning ceiling
    Over,
}

impl Severity {
    /// Short status label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::OnTrack => "on track",
            Severity::Warning => "warning",
            Severity::Over => "over",
        }
    }
}

/// Pacing status for one viewed month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthStatus {
    /// The month being viewed
    pub month: Month,
    /// Actual spend so far (or final, for a closed month)
    pub spent: Money,
    /// Projected end-of-month spend; `None` for a closed month
    pub projected: Option<Money>,
    /// Severity against the ceilings
    pub severity: Severity,
    /// Days remaining in the month (0 for a closed month)
    pub remaining_days: u32,
    /// Integer-truncated percent of the month elapsed (100 for a closed month)
    pub progress_percent: u32,
}

/// Project end-of-month spend: `spent × days_in_month / day_of_month`
///
/// Rounded to the nearest cent.
pub fn project(spent: Money, today: NaiveDate) -> Money {
    let month = Month::from_date(today);
    let days_in_month = i64::from(month.days_in_month());
    let day = i64::from(today.day());
    let cents = spent.cents() * days_in_month;
    // Round half away from zero.
    Money::from_cents((cents + cents.signum() * day / 2) / day)
}

/// Classify a projected spend for an in-progress month
pub fn severity_in_progress(projected: Money, budgets: &BudgetTable) -> Severity {
    if projected <= budgets.overall {
        Severity::OnTrack
    } else if projected <= budgets.warning {
        Severity::Warning
    } else {
        Severity::Over
    }
}

/// Classify the actual total of a closed month
///
/// Spend exactly equal to the ceiling is a warning, never on-track.
pub fn severity_closed(actual: Money, ceiling: Money) -> Severity {
    if actual < ceiling {
        Severity::OnTrack
    } else if actual == ceiling {
        Severity::Warning
    } else {
        Severity::Over
    }
}

/// Full pacing status for a viewed month
///
/// A month strictly before today's month is closed: 0 days left, 100%
/// elapsed, severity from the actual total. Anything else is judged by
/// projection from today's position in the current month.
pub fn month_status(
    month: Month,
    today: NaiveDate,
    spent: Money,
    budgets: &BudgetTable,
) -> MonthStatus {
    let current = Month::from_date(today);

    if month < current {
        return MonthStatus {
            month,
            spent,
            projected: None,
            severity: severity_closed(spent, budgets.overall),
            remaining_days: 0,
            progress_percent: 100,
        };
    }

    let projected = project(spent, today);
    let days_in_month = current.days_in_month();
    MonthStatus {
        month,
        spent,
        projected: Some(projected),
        severity: severity_in_progress(projected, budgets),
        remaining_days: days_in_month - today.day(),
        progress_percent: 100 * today.day() / days_in_month,
    }
}
