//! Bottom status bar: key hints and the load-time diagnostic count

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveTab, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.active_tab {
        ActiveTab::Overview => " ◀ ▶ month | h holiday | c category | Tab switch | q quit ",
        ActiveTab::Holiday => " ◀ ▶ holiday | Tab switch | q quit ",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    let diagnostics = app.dataset.diagnostics().len();
    if diagnostics > 0 {
        spans.push(Span::styled(
            format!(" {} data warnings (see `findash check`) ", diagnostics),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
