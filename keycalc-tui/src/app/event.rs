//! Event handling infrastructure
//!
//! Reads one terminal event at a time, blocking until one is available.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
        }
    }
}

/// Blocking reader for terminal events
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next key or resize event
    ///
    /// Mouse, focus and paste events are skipped.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => return Ok(TuiEvent::Resize(w, h)),
                _ => continue,
            }
        }
    }
}
