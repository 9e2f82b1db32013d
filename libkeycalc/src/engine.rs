//! Calculation engine
//!
//! Dispatches an operator symbol to the matching [`Operator`]. The engine
//! holds no state, so one instance is built at start-up and lent to
//! whatever needs it.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CalcError, Result};
use crate::operation::Operator;

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Apply the operator named by `symbol` to `part1` and `part2`
    ///
    /// Only `+ - * /` are operations; `=` and everything else is an
    /// `InvalidOperation`.
    pub fn calculate(&self, symbol: char, part1: Decimal, part2: Decimal) -> Result<Decimal> {
        let operator = Operator::from_symbol(symbol).ok_or(CalcError::InvalidOperation(symbol))?;
        operator.apply(part1, part2)
    }

    /// Parse both operand texts and then [`calculate`](Self::calculate)
    pub fn calculate_text(&self, symbol: char, part1: &str, part2: &str) -> Result<Decimal> {
        let part1 = parse_operand(part1)?;
        let part2 = parse_operand(part2)?;
        self.calculate(symbol, part1, part2)
    }
}

/// Read operand text as a decimal
///
/// Accepts what the keypad can produce: digits with at most one point,
/// including a bare leading (`.5`) or trailing (`5.`) point. A lone `.` or an
/// empty string is an `InputFormat` error; a well-formed number outside the
/// decimal range is an `Overflow`.
pub fn parse_operand(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let format_error = || CalcError::InputFormat(text.to_string());

    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if !unsigned.chars().any(|c| c.is_ascii_digit()) {
        return Err(format_error());
    }
    let well_formed = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;

    let mut normalized = trimmed.strip_suffix('.').unwrap_or(trimmed).to_string();
    if unsigned.starts_with('.') {
        let at = trimmed.len() - unsigned.len();
        normalized.insert(at, '0');
    }

    Decimal::from_str(&normalized).map_err(|_| {
        if well_formed {
            CalcError::Overflow
        } else {
            format_error()
        }
    })
}
