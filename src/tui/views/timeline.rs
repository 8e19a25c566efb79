//! Spending timeline chart
//!
//! Monthly totals over the configured window as a line chart, with months
//! that broke their ceiling marked in red and a dashed budget threshold
//! line once spending gets close enough to make it readable.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType},
    Frame,
};

use crate::services::aggregate;
use crate::tui::app::App;

/// Render the timeline chart for the selected category (or all categories)
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let budgets = app.dataset.budgets();
    let category = app.selected_category_name();

    // An unbudgeted category plots against the overall ceiling.
    let ceiling = category
        .and_then(|c| budgets.limit_for(c))
        .unwrap_or(budgets.overall);

    let points = aggregate::timeline(
        app.dataset.transactions(),
        app.include_holiday,
        category,
        app.dataset.settings().window_size,
        ceiling,
    );

    let title = match category {
        Some(name) => format!(" {} [c] ", name),
        None => " All categories [c] ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    if points.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let to_units = |cents: i64| cents as f64 / 100.0;

    let series: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, to_units(p.total.cents())))
        .collect();
    let over_points: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.exceeds_budget)
        .map(|(i, p)| (i as f64, to_units(p.total.cents())))
        .collect();

    let x_max = (points.len() - 1) as f64;
    let show_threshold = aggregate::show_threshold(&points, ceiling);
    let threshold: Vec<(f64, f64)> = vec![
        (0.0, to_units(ceiling.cents())),
        (x_max, to_units(ceiling.cents())),
    ];

    let mut y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);
    if show_threshold {
        y_max = y_max.max(to_units(ceiling.cents()));
    }
    let y_max = (y_max * 1.1).max(1.0);

    let mut datasets = vec![ChartDataset::default()
        .name("spent")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&series)];
    if show_threshold {
        datasets.push(
            ChartDataset::default()
                .name("budget")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&threshold),
        );
    }
    if !over_points.is_empty() {
        datasets.push(
            ChartDataset::default()
                .name("over")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Red))
                .data(&over_points),
        );
    }

    let x_labels: Vec<String> = axis_labels(&points);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Total spent")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", y_max / 2.0),
                    format!("{:.0}", y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

/// First / middle / last month labels for the x axis
fn axis_labels(points: &[aggregate::TimelinePoint]) -> Vec<String> {
    let label = |i: usize| points[i].month.first_day().format("%b %y").to_string();
    match points.len() {
        0 => Vec::new(),
        1 => vec![label(0)],
        2 => vec![label(0), label(1)],
        n => vec![label(0), label(n / 2), label(n - 1)],
    }
}
