//! Event handling for the TUI
//!
//! This module handles terminal events (key presses, resize) using
//! crossterm's event system, polled from a dedicated thread.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{DashError, DashResult};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic redraws
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)),
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                sender.send(Event::Resize(width, height))
                            }
                            Ok(_) => Ok(()),
                            Err(_) => return,
                        };
                        if forwarded.is_err() {
                            return;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Block until the next event arrives
    pub fn next(&self) -> DashResult<Event> {
        self.receiver
            .recv()
            .map_err(|e| DashError::Tui(format!("event channel closed: {}", e)))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
