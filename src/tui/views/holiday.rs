//! Holiday tab: holiday selector, per-category bar chart, top items
//!
//! A holiday is every transaction sharing one note, regardless of period.
//! The selector walks the notes in first-appearance order.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display;
use crate::services::aggregate;
use crate::tui::app::App;

/// Render the holiday selector and its spending total
pub fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = &app.dataset.settings().currency_symbol;

    let block = Block::default().title(" Holiday ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(note) = app.selected_holiday_note() else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No holidays in the ledger",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    };

    let group = aggregate::holiday_group(app.dataset.transactions(), note);
    let total = aggregate::total(&group);

    let rows = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(1),
            ratatui::layout::Constraint::Length(1),
        ])
        .split(inner);

    let header = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(note, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);
    frame.render_widget(
        Paragraph::new(display::holiday_total(total, symbol)),
        rows[1],
    );
}

/// Render the per-category bar chart for the selected holiday
pub fn render_chart(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Spending by category ")
        .borders(Borders::ALL);

    let Some(note) = app.selected_holiday_note() else {
        frame.render_widget(block, area);
        return;
    };

    let group = aggregate::holiday_group(app.dataset.transactions(), note);
    let totals = aggregate::category_totals(&group);

    // BarChart wants whole currency units.
    let bars: Vec<(&str, u64)> = totals
        .iter()
        .map(|ct| {
            let label = ct.category.as_deref().unwrap_or("Unknown");
            (label, ct.total.cents().max(0) as u64 / 100)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&bars)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(chart, area);
}

/// Render the ranked top-item list for the selected holiday
pub fn render_top_items(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = &app.dataset.settings().currency_symbol;

    let block = Block::default()
        .title(" Top items this holiday ")
        .borders(Borders::ALL);

    let Some(note) = app.selected_holiday_note() else {
        frame.render_widget(block, area);
        return;
    };

    let group = aggregate::holiday_group(app.dataset.transactions(), note);
    let top = aggregate::top_items(&group, app.dataset.settings().top_items);

    let items: Vec<ListItem> = top
        .iter()
        .enumerate()
        .map(|(rank, item)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", rank + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.item.clone()),
                Span::styled(
                    format!("  {}", item.total.format_with_symbol(symbol)),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
