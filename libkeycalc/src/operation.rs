//! The four arithmetic operations
//!
//! Each operator is a variant of [`Operator`]; applying one is a pure
//! function of its two operands.

use rust_decimal::Decimal;

use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Value that leaves the left operand unchanged: `0` for `+`/`-`, `1` for `*`/`/`
    ///
    /// Used as the right operand of the preview when nothing has been typed yet.
    pub fn identity(self) -> Decimal {
        match self {
            Operator::Add | Operator::Subtract => Decimal::ZERO,
            Operator::Multiply | Operator::Divide => Decimal::ONE,
        }
    }

    pub fn apply(self, part1: Decimal, part2: Decimal) -> Result<Decimal> {
        let result = match self {
            Operator::Add => part1.checked_add(part2),
            Operator::Subtract => part1.checked_sub(part2),
            Operator::Multiply => part1.checked_mul(part2),
            Operator::Divide => {
                if part2.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                part1.checked_div(part2)
            }
        };

        result.ok_or(CalcError::Overflow)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
