//! Application state for the TUI
//!
//! The App struct holds the selection state (tab, period, category, holiday,
//! holiday-include toggle) over a borrowed dataset. Views recompute their
//! aggregates from the dataset on every draw.

use chrono::NaiveDate;

use crate::models::Month;
use crate::services::aggregate;
use crate::services::dataset::Dataset;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Overview,
    Holiday,
}

/// Main application state
pub struct App<'a> {
    /// The immutable dataset
    pub dataset: &'a Dataset,

    /// Today's date, fixed at startup
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Selectable months, chronological, current month last
    pub months: Vec<Month>,

    /// Selected month index into `months`
    pub selected_month: usize,

    /// Include holiday-tagged transactions in the overview figures
    pub include_holiday: bool,

    /// Categories offered by the timeline selector
    pub categories: Vec<String>,

    /// Selected timeline category; `None` means all categories
    pub selected_category: Option<usize>,

    /// Holiday notes in first-appearance order
    pub holidays: Vec<String>,

    /// Selected holiday index into `holidays`
    pub selected_holiday: usize,
}

impl<'a> App<'a> {
    /// Create application state over a dataset
    pub fn new(dataset: &'a Dataset, today: NaiveDate) -> Self {
        let current = Month::from_date(today);
        let months: Vec<Month> = aggregate::period_totals(
            dataset.transactions(),
            true,
            dataset.settings().window_size,
            current,
        )
        .into_iter()
        .map(|p| p.month)
        .collect();

        // Default to the current month, which period_totals guarantees.
        let selected_month = months
            .iter()
            .position(|m| *m == current)
            .unwrap_or(months.len().saturating_sub(1));

        let categories = dataset
            .selectable_categories()
            .into_iter()
            .map(str::to_string)
            .collect();

        let holidays = aggregate::holidays(dataset.transactions());
        let selected_holiday = holidays.len().saturating_sub(1);

        Self {
            dataset,
            today,
            should_quit: false,
            active_tab: ActiveTab::default(),
            months,
            selected_month,
            include_holiday: true,
            categories,
            selected_category: None,
            holidays,
            selected_holiday,
        }
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch between the overview and holiday tabs
    pub fn toggle_tab(&mut self) {
        self.active_tab = match self.active_tab {
            ActiveTab::Overview => ActiveTab::Holiday,
            ActiveTab::Holiday => ActiveTab::Overview,
        };
    }

    /// The selected month
    pub fn selected_month(&self) -> Month {
        self.months[self.selected_month]
    }

    /// Select the previous month
    pub fn prev_month(&mut self) {
        if self.selected_month > 0 {
            self.selected_month -= 1;
        }
    }

    /// Select the next month
    pub fn next_month(&mut self) {
        if self.selected_month + 1 < self.months.len() {
            self.selected_month += 1;
        }
    }

    /// Toggle holiday-tagged spending in the overview figures
    pub fn toggle_holiday(&mut self) {
        self.include_holiday = !self.include_holiday;
    }

    /// The selected timeline category name, `None` for all
    pub fn selected_category_name(&self) -> Option<&str> {
        self.selected_category
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    /// Cycle the timeline category: all → first → ... → last → all
    pub fn cycle_category(&mut self) {
        self.selected_category = match self.selected_category {
            None if self.categories.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    /// The selected holiday note, if any holidays exist
    pub fn selected_holiday_note(&self) -> Option<&str> {
        self.holidays.get(self.selected_holiday).map(String::as_str)
    }

    /// Select the previous holiday
    pub fn prev_holiday(&mut self) {
        if self.selected_holiday > 0 {
            self.selected_holiday -= 1;
        }
    }

    /// Select the next holiday
    pub fn next_holiday(&mut self) {
        if self.selected_holiday + 1 < self.holidays.len() {
            self.selected_holiday += 1;
        }
    }
}
