//! Event handler for the TUI
//!
//! Routes keyboard events to selection changes on the App. Every change is
//! picked up on the next draw, which recomputes all aggregates.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::error::DashResult;

use super::app::{ActiveTab, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> DashResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> DashResult<()> {
    // Windows terminals report both press and release.
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
        }

        KeyCode::Tab => {
            app.toggle_tab();
        }
        KeyCode::Char('1') => {
            app.active_tab = ActiveTab::Overview;
        }
        KeyCode::Char('2') => {
            app.active_tab = ActiveTab::Holiday;
        }

        KeyCode::Left => match app.active_tab {
            ActiveTab::Overview => app.prev_month(),
            ActiveTab::Holiday => app.prev_holiday(),
        },
        KeyCode::Right => match app.active_tab {
            ActiveTab::Overview => app.next_month(),
            ActiveTab::Holiday => app.next_holiday(),
        },

        KeyCode::Char('h') if app.active_tab == ActiveTab::Overview => {
            app.toggle_holiday();
        }
        KeyCode::Char('c') if app.active_tab == ActiveTab::Overview => {
            app.cycle_category();
        }

        _ => {}
    }

    Ok(())
}
