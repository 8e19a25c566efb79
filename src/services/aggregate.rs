//! Spending aggregation
//!
//! Pure functions over the classified ledger: period totals, category
//! breakdowns, holiday groups, ranked top items, and the timeline series.
//! Everything is recomputed from scratch on each call; the dataset is small
//! and read-only, so there is no cache to invalidate.

use std::collections::BTreeMap;

use crate::models::{Money, Month};

use super::classify::ClassifiedTransaction;

/// Total spend for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodAggregate {
    /// The month
    pub month: Month,
    /// Summed price for the month
    pub total: Money,
}

/// Total spend for one category bucket within a filtered set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name, `None` for the unknown bucket
    pub category: Option<String>,
    /// Summed price for the bucket
    pub total: Money,
}

/// One entry of a ranked top-item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopItem {
    /// Merchant string
    pub item: String,
    /// Summed spend on the item
    pub total: Money,
}

/// All spending tagged with one holiday note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayGroup {
    /// The note shared by the group's transactions
    pub note: String,
    /// Summed spend for the holiday
    pub total: Money,
}

/// One point of the spending timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    /// The month
    pub month: Month,
    /// Summed spend, zero for months with no matching transactions
    pub total: Money,
    /// Whether the total exceeds the applicable budget ceiling
    pub exceeds_budget: bool,
}

/// Filter the ledger by period and the holiday-include toggle
///
/// `month: None` means all periods. When `include_holiday` is false,
/// transactions carrying a note are excluded.
pub fn filter<'a>(
    transactions: &'a [ClassifiedTransaction],
    month: Option<Month>,
    include_holiday: bool,
) -> Vec<&'a ClassifiedTransaction> {
    transactions
        .iter()
        .filter(|t| month.map_or(true, |m| m.contains(t.transaction.date)))
        .filter(|t| include_holiday || !t.transaction.is_holiday())
        .collect()
}

/// Sum the prices of a filtered set
pub fn total(transactions: &[&ClassifiedTransaction]) -> Money {
    transactions.iter().map(|t| t.transaction.price).sum()
}

/// Group by (year, month), keeping the most recent `window` months
///
/// Sorted chronologically. The current calendar month is always present,
/// with a zero total if it has no transactions yet.
pub fn period_totals(
    transactions: &[ClassifiedTransaction],
    include_holiday: bool,
    window: usize,
    current: Month,
) -> Vec<PeriodAggregate> {
    let mut by_month: BTreeMap<Month, Money> = BTreeMap::new();
    for t in filter(transactions, None, include_holiday) {
        *by_month.entry(t.transaction.month()).or_default() += t.transaction.price;
    }

    let mut periods: Vec<PeriodAggregate> = by_month
        .into_iter()
        .map(|(month, total)| PeriodAggregate { month, total })
        .collect();

    if periods.len() > window {
        periods.drain(..periods.len() - window);
    }

    if !periods.iter().any(|p| p.month == current) {
        periods.push(PeriodAggregate {
            month: current,
            total: Money::zero(),
        });
        periods.sort_by_key(|p| p.month);
    }

    periods
}

/// Per-category totals for a filtered set, unknown bucket included
///
/// Buckets appear in first-seen order, so the result is deterministic for a
/// given ledger order.
pub fn category_totals(transactions: &[&ClassifiedTransaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in transactions {
        let category = t.category();
        match totals
            .iter_mut()
            .find(|ct| ct.category.as_deref() == category)
        {
            Some(ct) => ct.total += t.transaction.price,
            None => totals.push(CategoryTotal {
                category: category.map(str::to_string),
                total: t.transaction.price,
            }),
        }
    }
    totals
}

/// Total spend in one category within a filtered set
pub fn category_spend(transactions: &[&ClassifiedTransaction], category: &str) -> Money {
    transactions
        .iter()
        .filter(|t| t.category() == Some(category))
        .map(|t| t.transaction.price)
        .sum()
}

/// Top `k` items by summed spend, descending
///
/// The sort is stable: items with equal totals keep first-seen order. Fewer
/// than `k` distinct items returns all of them.
pub fn top_items(transactions: &[&ClassifiedTransaction], k: usize) -> Vec<TopItem> {
    let mut items: Vec<TopItem> = Vec::new();
    for t in transactions {
        match items.iter_mut().find(|i| i.item == t.transaction.item) {
            Some(entry) => entry.total += t.transaction.price,
            None => items.push(TopItem {
                item: t.transaction.item.clone(),
                total: t.transaction.price,
            }),
        }
    }

    items.sort_by(|a, b| b.total.cmp(&a.total));
    items.truncate(k);
    items
}

/// Distinct holiday notes in first-appearance order
pub fn holidays(transactions: &[ClassifiedTransaction]) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();
    for t in transactions {
        if let Some(note) = &t.transaction.note {
            if !notes.iter().any(|n| n == note) {
                notes.push(note.clone());
            }
        }
    }
    notes
}

/// Transactions tagged with one holiday note, independent of period
pub fn holiday_group<'a>(
    transactions: &'a [ClassifiedTransaction],
    note: &str,
) -> Vec<&'a ClassifiedTransaction> {
    transactions
        .iter()
        .filter(|t| t.transaction.note.as_deref() == Some(note))
        .collect()
}

/// Summed totals for every holiday group
pub fn holiday_totals(transactions: &[ClassifiedTransaction]) -> Vec<HolidayGroup> {
    holidays(transactions)
        .into_iter()
        .map(|note| {
            let group = holiday_group(transactions, &note);
            HolidayGroup {
                total: total(&group),
                note,
            }
        })
        .collect()
}

/// Dense monthly spending series for the timeline chart
///
/// The month span covers the most recent `window` months present in the
/// (holiday-filtered) ledger, with gap months filled in at zero. Totals are
/// for the selected category, or all categories when `category` is `None`.
/// Each point is flagged when it exceeds `ceiling`.
pub fn timeline(
    transactions: &[ClassifiedTransaction],
    include_holiday: bool,
    category: Option<&str>,
    window: usize,
    ceiling: Money,
) -> Vec<TimelinePoint> {
    let eligible = filter(transactions, None, include_holiday);

    // Span months come from the whole filtered ledger, not the category
    // selection, so every category plots on the same axis.
    let mut span_months: Vec<Month> = Vec::new();
    for t in &eligible {
        let month = t.transaction.month();
        if !span_months.contains(&month) {
            span_months.push(month);
        }
    }
    span_months.sort();
    if span_months.len() > window {
        span_months.drain(..span_months.len() - window);
    }

    let (Some(&first), Some(&last)) = (span_months.first(), span_months.last()) else {
        return Vec::new();
    };

    let mut by_month: BTreeMap<Month, Money> = BTreeMap::new();
    for t in eligible {
        if category.is_some() && t.category() != category {
            continue;
        }
        *by_month.entry(t.transaction.month()).or_default() += t.transaction.price;
    }

    let mut points = Vec::new();
    let mut month = first;
    loop {
        let total = by_month.get(&month).copied().unwrap_or_default();
        points.push(TimelinePoint {
            month,
            total,
            exceeds_budget: total > ceiling,
        });
        if month == last {
            break;
        }
        month = month.next();
    }
    points
}

/// Whether the budget threshold line is worth drawing
///
/// Hidden when the whole series sits below 90% of the ceiling, where the
/// line would only flatten the chart's scale.
pub fn show_threshold(points: &[TimelinePoint], ceiling: Money) -> bool {
    points
        .iter()
        .map(|p| p.total)
        .max()
        .map_or(false, |max| max.cents() * 10 >= ceiling.cents() * 9)
}
