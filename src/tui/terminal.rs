//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use chrono::Local;

use crate::error::DashResult;
use crate::services::dataset::Dataset;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> DashResult<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> DashResult<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI over a loaded dataset
pub fn run_tui(dataset: &Dataset) -> DashResult<()> {
    let mut terminal = init_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(dataset, today);

    let events = EventHandler::default();

    // Main event loop
    let result = loop {
        if let Err(e) = terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        }) {
            break Err(e.into());
        }

        match events.next() {
            Ok(event) => {
                if let Err(e) = handle_event(&mut app, event) {
                    break Err(e);
                }
            }
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore even when the loop failed, then surface the first error.
    restore_terminal()?;
    result
}
