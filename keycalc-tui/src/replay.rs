//! Non-interactive replay
//!
//! Feeds a string of keys through the same keymap and reducer as the
//! interactive loop, for scripting and for checking a calculation without
//! a terminal. Letters stand in for the keys a string cannot hold:
//! `b` is backspace, `r` is the reset gesture and `q` the quit gesture.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libkeycalc::{CalcError, Calculator};

use crate::app::{reduce, Action, AppState, UiConfig};

/// Outcome of a replay
#[derive(Debug)]
pub struct Replay {
    pub state: AppState,
    /// User messages for keystrokes that failed, in order
    pub errors: Vec<String>,
    /// Fault that stopped the replay early
    pub fault: Option<CalcError>,
}

/// Key event a replay character stands for
pub fn key_event_for(c: char, config: &UiConfig) -> KeyEvent {
    match c {
        'b' => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        'r' => KeyEvent::new(KeyCode::Char(config.keys.reset), KeyModifiers::CONTROL),
        'q' => KeyEvent::new(KeyCode::Char(config.keys.quit), KeyModifiers::CONTROL),
        _ => KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
    }
}

/// Replay `input`, stopping early at a quit gesture or a fault
pub fn replay(input: &str, config: UiConfig, engine: &Calculator) -> Replay {
    let mut state = AppState::with_config(config);
    let mut errors = Vec::new();
    let mut fault = None;

    for c in input.chars() {
        let event = key_event_for(c, &state.config);
        state = reduce(state, Action::Key(event), engine);

        if let Some(error) = state.error.take() {
            errors.push(error);
        }
        fault = state.fault.take();
        if fault.is_some() || state.should_quit() {
            break;
        }
    }

    Replay {
        state,
        errors,
        fault,
    }
}
