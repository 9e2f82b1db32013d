//! Error types for keycalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Message shown when a resolve step divides by zero
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot perform division by zero.";

/// Prefix for operand text that cannot be read as a number
pub const INPUT_FORMAT_PREFIX: &str = "Input format error: ";

/// Prefix for any fault that is neither a format nor a division error
pub const UNEXPECTED_PREFIX: &str = "An unexpected error occurred: ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot parse '{0}' as a number")]
    InputFormat(String),

    #[error("invalid operation '{0}'")]
    InvalidOperation(char),

    #[error("arithmetic overflow")]
    Overflow,
}

impl CalcError {
    /// True for sequencing defects that a user can never trigger on purpose
    pub fn is_fault(&self) -> bool {
        matches!(self, CalcError::InvalidOperation(_))
    }

    /// Fixed message shown to the person at the keyboard
    pub fn user_message(&self) -> String {
        match self {
            CalcError::DivisionByZero => DIVISION_BY_ZERO_MESSAGE.to_string(),
            CalcError::InputFormat(text) => format!("{}{}", INPUT_FORMAT_PREFIX, text),
            CalcError::InvalidOperation(_) | CalcError::Overflow => {
                format!("{}{}", UNEXPECTED_PREFIX, self)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
