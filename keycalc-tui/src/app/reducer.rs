//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The only collaborator is the stateless
//! [`Calculator`]; no I/O happens here.
//!
//! This is also where a failed keystroke is caught: the session keeps its
//! pre-keystroke value and the user gets the error's fixed message. User
//! errors let the event loop carry on; a fault is parked in `state.fault`
//! for the loop to end the session with.

use crossterm::event::{KeyCode, KeyEvent};
use libkeycalc::{Calculator, Transition};
use tracing::{error, warn};

use super::actions::Action;
use super::keymap::map_key;
use super::state::{AppState, StatusBarState};

pub fn reduce(state: AppState, action: Action, engine: &Calculator) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key, engine),
        Action::Resize(_, _) => state, // Next draw picks up the new size

        // === Calculator ===
        Action::Input(key) => {
            let mut session = state.session;

            match session.handle(engine, key) {
                Ok(transition) => {
                    let message = match transition {
                        Transition::Reset => Some("Calculator reset".to_string()),
                        _ => None,
                    };

                    AppState {
                        session,
                        error: None,
                        status: StatusBarState { message },
                        ..state
                    }
                }
                Err(e) if e.is_fault() => {
                    error!(error = %e, ?key, "calculator fault");
                    AppState {
                        session,
                        error: Some(e.user_message()),
                        fault: Some(e),
                        ..state
                    }
                }
                Err(e) => {
                    warn!(error = %e, ?key, "keystroke rejected");
                    AppState {
                        session,
                        error: Some(e.user_message()),
                        ..state
                    }
                }
            }
        }

        // === Error Handling ===
        Action::DismissError => AppState {
            error: None,
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Esc dismisses the error overlay; everything else goes through the keymap.
fn handle_key(state: AppState, key: KeyEvent, engine: &Calculator) -> AppState {
    if key.code == KeyCode::Esc && state.error.is_some() {
        return reduce(state, Action::DismissError, engine);
    }

    match map_key(&key, &state.config.keys) {
        Some(input) => reduce(state, Action::Input(input), engine),
        None => state,
    }
}
