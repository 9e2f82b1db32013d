//! keycalc-tui library
//!
//! Exports the front-end pieces for the binary and for testing.

pub mod app;
pub mod error;
pub mod replay;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState};
pub use error::{Result, TuiError};
