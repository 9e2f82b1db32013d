//! keycalc - a keystroke-driven decimal calculator
//!
//! This library holds the calculator core: the operation set, the step
//! log, the calculation engine and the input state machine that ties them
//! together, plus the configuration and logging shared by front-ends.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod machine;
pub mod operation;
pub mod readout;
pub mod steps;

// Re-export commonly used types
pub use config::{Config, KeyBindings};
pub use engine::Calculator;
pub use error::{CalcError, ConfigError, Result};
pub use machine::{ActiveOperator, Key, Phase, Session, Transition};
pub use operation::Operator;
pub use readout::Readout;
pub use rust_decimal::Decimal;
pub use steps::{Step, StepLog};
