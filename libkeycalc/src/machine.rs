//! Input state machine
//!
//! A [`Session`] consumes one [`Key`] at a time. Operator keys resolve any
//! pending computation through the [`Calculator`] and log the operand that
//! was just entered; `=` finalizes the session until it is reset.
//!
//! Keystrokes are atomic: a key whose resolve step fails leaves the session
//! exactly as it was before the key was pressed.

use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::{parse_operand, Calculator};
use crate::error::{CalcError, Result};
use crate::operation::Operator;
use crate::steps::StepLog;

/// A recognized keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Backspace,
    Reset,
    Quit,
}

impl Key {
    /// Map a typed character to a key; anything unrecognized is `None`
    ///
    /// Reset and quit are control gestures and have no character form.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::Point),
            '=' => Some(Key::Equals),
            '\u{8}' | '\u{7f}' => Some(Key::Backspace),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }
}

/// The operator currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveOperator {
    Pending(Operator),
    /// `=` was pressed; only reset or quit are accepted
    Finalized,
}

impl ActiveOperator {
    pub fn symbol(self) -> char {
        match self {
            ActiveOperator::Pending(op) => op.symbol(),
            ActiveOperator::Finalized => '=',
        }
    }
}

impl std::fmt::Display for ActiveOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered yet
    Idle,
    /// Digits are being typed
    Accumulating,
    /// An operator was chosen, waiting for the next operand
    OperatorPending,
    /// Finalized by `=`
    Resolved,
}

/// What a keystroke did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not a key the current phase accepts
    Ignored,
    /// Operand text changed
    Edited,
    /// An operator was applied
    Committed,
    /// `=` finalized the calculation
    Resolved,
    Reset,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    first_operand: String,
    entry: String,
    operator: ActiveOperator,
    steps: StepLog,
    exit: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            first_operand: String::new(),
            entry: String::new(),
            operator: ActiveOperator::Pending(Operator::Add),
            steps: StepLog::new(),
            exit: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved left-hand value, as decimal text
    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    /// Operand text typed since the last operator
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn operator(&self) -> ActiveOperator {
        self.operator
    }

    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    pub fn phase(&self) -> Phase {
        if self.operator == ActiveOperator::Finalized {
            Phase::Resolved
        } else if !self.entry.is_empty() {
            Phase::Accumulating
        } else if !self.first_operand.is_empty() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    /// Apply one keystroke
    ///
    /// On error the session is left untouched.
    pub fn handle(&mut self, engine: &Calculator, key: Key) -> Result<Transition> {
        let mut next = self.clone();
        let transition = next.apply(engine, key)?;

        debug!(
            ?key,
            ?transition,
            phase = ?next.phase(),
            first = %next.first_operand,
            entry = %next.entry,
            "keystroke applied"
        );

        *self = next;
        Ok(transition)
    }

    /// Result the session would show if `=` were pressed now, without committing it
    ///
    /// `None` until a step has been logged. When nothing has been typed
    /// since the last operator, that operator's identity stands in for the
    /// right operand. Once finalized, this is the committed result.
    pub fn preview(&self, engine: &Calculator) -> Option<Result<Decimal>> {
        if self.steps.is_empty() {
            return None;
        }

        let preview = match self.operator {
            ActiveOperator::Finalized => parse_operand(&self.first_operand),
            ActiveOperator::Pending(op) => parse_operand(&self.first_operand).and_then(|part1| {
                let part2 = if self.entry.is_empty() {
                    op.identity()
                } else {
                    parse_operand(&self.entry)?
                };
                engine.calculate(op.symbol(), part1, part2)
            }),
        };

        Some(preview)
    }

    fn apply(&mut self, engine: &Calculator, key: Key) -> Result<Transition> {
        let control = matches!(key, Key::Reset | Key::Quit);
        if self.operator == ActiveOperator::Finalized && !control {
            return Ok(Transition::Ignored);
        }

        let transition = match key {
            Key::Reset => {
                *self = Session::new();
                Transition::Reset
            }
            Key::Quit => {
                self.exit = true;
                Transition::Quit
            }
            Key::Operator(op) => {
                self.resolve(engine)?;
                self.operator = ActiveOperator::Pending(op);
                Transition::Committed
            }
            Key::Equals => {
                self.resolve(engine)?;
                self.operator = ActiveOperator::Finalized;
                Transition::Resolved
            }
            Key::Point if self.entry.contains('.') => Transition::Ignored,
            Key::Point => {
                self.entry.push('.');
                Transition::Edited
            }
            Key::Backspace => match self.entry.pop() {
                Some(_) => Transition::Edited,
                None => Transition::Ignored,
            },
            Key::Digit(c) if c.is_ascii_digit() => {
                self.entry.push(c);
                Transition::Edited
            }
            Key::Digit(_) => Transition::Ignored,
        };

        Ok(transition)
    }

    /// Log the entry under the previous operator and fold it into the first operand
    fn resolve(&mut self, engine: &Calculator) -> Result<()> {
        let ActiveOperator::Pending(previous) = self.operator else {
            return Err(CalcError::InvalidOperation(self.operator.symbol()));
        };
        let should_calculate = !self.first_operand.is_empty() && !self.entry.is_empty();

        self.steps.add(&self.entry, previous);

        if should_calculate {
            let result = engine.calculate_text(previous.symbol(), &self.first_operand, &self.entry)?;
            self.first_operand = result.to_string();
        } else if self.first_operand.is_empty() {
            self.first_operand = self.entry.clone();
        }

        self.entry.clear();
        Ok(())
    }
}
