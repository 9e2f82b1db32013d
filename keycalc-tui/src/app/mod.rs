//! Application module
//!
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//! - Keymap: terminal keys to calculator keys

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
