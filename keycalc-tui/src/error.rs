//! Error types for keycalc-tui
//!
//! Errors that end the interactive loop. Ordinary keystroke errors never
//! get here; the reducer reports them and the loop carries on.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Calculator fault that ended the session
    #[error("Calculator fault: {0}")]
    Calc(#[from] libkeycalc::CalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_calc_error() {
        let error: TuiError = libkeycalc::CalcError::InvalidOperation('=').into();
        assert_eq!(error.to_string(), "Calculator fault: invalid operation '='");
    }

    #[test]
    fn test_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let error: TuiError = io.into();
        assert_eq!(error.to_string(), "Terminal error: gone");
    }
}
