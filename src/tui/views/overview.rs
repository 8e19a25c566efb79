//! Overview tab: month summary, category gauges, top items
//!
//! The left column mirrors the classic dashboard: how far through the month
//! we are, how much of the budget is gone, and a gauge per budgeted
//! category. Everything recomputes from the dataset on each draw.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::display;
use crate::services::{aggregate, pacing};
use crate::tui::app::App;

use super::severity_color;

/// Render the month summary: selector, progress gauge, budget sentence
pub fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let month = app.selected_month();
    let budgets = app.dataset.budgets();
    let symbol = &app.dataset.settings().currency_symbol;

    let period_txns =
        aggregate::filter(app.dataset.transactions(), Some(month), app.include_holiday);
    let spent = aggregate::total(&period_txns);
    let status = pacing::month_status(month, app.today, spent, budgets);

    let block = Block::default()
        .title(format!(" {} ", month.label()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(1), // selector + days left
            ratatui::layout::Constraint::Length(1), // month progress gauge
            ratatui::layout::Constraint::Length(1), // spacer
            ratatui::layout::Constraint::Length(1), // budget sentence
            ratatui::layout::Constraint::Length(1), // pacing line
            ratatui::layout::Constraint::Length(1), // holiday toggle
        ])
        .split(inner);

    let holiday_marker = if app.include_holiday { "[x]" } else { "[ ]" };
    let header = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            display::days_left(status.remaining_days, month),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(severity_color(status.severity)))
        .percent(status.progress_percent.min(100) as u16)
        .label(display::month_progress(status.progress_percent));
    frame.render_widget(progress, rows[1]);

    frame.render_widget(
        Paragraph::new(display::budget_sentence(spent, budgets.overall, symbol)),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            display::pacing_line(&status, symbol),
            Style::default().fg(severity_color(status.severity)),
        ))),
        rows[4],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} include holiday [h]", holiday_marker),
            Style::default().fg(Color::DarkGray),
        ))),
        rows[5],
    );
}

/// Render one gauge per budgeted category
pub fn render_categories(frame: &mut Frame, app: &mut App, area: Rect) {
    let month = app.selected_month();
    let budgets = app.dataset.budgets();
    let symbol = &app.dataset.settings().currency_symbol;

    let period_txns =
        aggregate::filter(app.dataset.transactions(), Some(month), app.include_holiday);

    let block = Block::default()
        .title(" Per category spending ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let names: Vec<&str> = budgets.category_names().collect();
    let constraints: Vec<ratatui::layout::Constraint> = names
        .iter()
        .map(|_| ratatui::layout::Constraint::Length(2))
        .collect();
    let rows = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, category) in rows.iter().zip(names) {
        let limit = budgets.limit_for(category).unwrap_or_default();
        let spent = aggregate::category_spend(&period_txns, category);
        let percent = spent.percent_of(limit);

        let color = if percent >= 100 {
            Color::Red
        } else {
            Color::Cyan
        };

        let halves = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Length(1),
                ratatui::layout::Constraint::Length(1),
            ])
            .split(*row);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(percent.min(100) as u16)
            .label(display::percent_label(percent));
        frame.render_widget(gauge, halves[0]);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", category),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(display::spent_out_of(spent, limit, symbol)),
            ])),
            halves[1],
        );
    }
}

/// Render the ranked top-item list for the selected period
pub fn render_top_items(frame: &mut Frame, app: &mut App, area: Rect) {
    let month = app.selected_month();
    let symbol = &app.dataset.settings().currency_symbol;

    let period_txns =
        aggregate::filter(app.dataset.transactions(), Some(month), app.include_holiday);
    let top = aggregate::top_items(&period_txns, app.dataset.settings().top_items);

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

    let list = List::new(items).block(
        Block::default()
            .title(" Top items this period ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
