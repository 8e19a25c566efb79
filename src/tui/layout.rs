//! Layout definitions for the TUI
//!
//! Defines the region structure of each tab: tab bar on top, status bar at
//! the bottom, and a two-column body in between.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions shared by both tabs
pub struct AppLayout {
    /// Tab bar at the top
    pub tabs: Rect,
    /// Tab body
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            body: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the overview tab
pub struct OverviewLayout {
    /// Month summary: selector, progress gauge, budget sentence
    pub summary: Rect,
    /// Per-category gauges
    pub categories: Rect,
    /// Ranked top-item list
    pub top_items: Rect,
    /// Spending timeline chart
    pub timeline: Rect,
}

impl OverviewLayout {
    /// Calculate overview layout
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(8)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(8)])
            .split(columns[1]);

        Self {
            summary: left[0],
            categories: left[1],
            top_items: right[0],
            timeline: right[1],
        }
    }
}

/// Layout for the holiday tab
pub struct HolidayLayout {
    /// Holiday selector and total
    pub summary: Rect,
    /// Per-category bar chart
    pub chart: Rect,
    /// Ranked top-item list
    pub top_items: Rect,
}

impl HolidayLayout {
    /// Calculate holiday layout
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(8)])
            .split(columns[0]);

        Self {
            summary: left[0],
            chart: left[1],
            top_items: columns[1],
        }
    }
}
