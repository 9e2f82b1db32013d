//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libkeycalc::Key;

/// Actions that trigger state transitions
///
/// Actions are plain data describing what happened; the reducer
/// (see `reducer.rs`) applies them to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Raw keyboard event, translated through the keymap
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    // === Calculator ===
    /// A recognized calculator keystroke
    Input(Key),

    // === Error Handling ===
    /// Dismiss error overlay
    DismissError,
}
