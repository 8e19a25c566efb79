//! TUI Views module
//!
//! Contains the overview and holiday tabs plus the shared chrome (tab bar,
//! status bar).

pub mod holiday;
pub mod overview;
pub mod status_bar;
pub mod timeline;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::services::Severity;

use super::app::{ActiveTab, App};
use super::layout::{AppLayout, HolidayLayout, OverviewLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tab_bar(frame, app, layout.tabs);

    match app.active_tab {
        ActiveTab::Overview => {
            let body = OverviewLayout::new(layout.body);
            overview::render_summary(frame, app, body.summary);
            overview::render_categories(frame, app, body.categories);
            overview::render_top_items(frame, app, body.top_items);
            timeline::render(frame, app, body.timeline);
        }
        ActiveTab::Holiday => {
            let body = HolidayLayout::new(layout.body);
            holiday::render_summary(frame, app, body.summary);
            holiday::render_chart(frame, app, body.chart);
            holiday::render_top_items(frame, app, body.top_items);
        }
    }

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the tab bar
fn render_tab_bar(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let selected = match app.active_tab {
        ActiveTab::Overview => 0,
        ActiveTab::Holiday => 1,
    };

    let tabs = Tabs::new(vec![" Overview [1] ", " Holiday [2] "])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Terminal color for a pacing severity tier
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::OnTrack => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Over => Color::Red,
    }
}
