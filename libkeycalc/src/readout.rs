//! Display text for a session
//!
//! A [`Readout`] is a pure projection of a [`Session`]: the operand/tape
//! body, the preview or final result, and the reset prompt once the
//! calculation is finalized. Front-ends decide how to paint it; its
//! `Display` impl gives the plain-text form.

use crate::config::KeyBindings;
use crate::engine::Calculator;
use crate::machine::{Phase, Session};

pub const WELCOME_MESSAGE: &str = "\t\tWelcome to keycalc\n\t\t==================\n";

const RESULT_RULE: &str = "\t---------------";
const RESULT_FOOTER: &str = "\t===============";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Operands, or the tape plus the active operator and entry
    pub body: String,
    /// Preview (or final) value, or the message explaining why there is none
    pub result: Option<Result<String, String>>,
    /// Shown once `=` has been pressed
    pub prompt: Option<String>,
}

impl Readout {
    pub fn of(session: &Session, engine: &Calculator, keys: &KeyBindings) -> Self {
        let body = match session.steps().render() {
            None => format!("\t\t{}\n\t\t     {}", session.first_operand(), session.entry()),
            Some(tape) => format!(
                "\t\t{}\n\t{}       {}",
                tape,
                session.operator(),
                session.entry()
            ),
        };

        let result = session.preview(engine).map(|preview| {
            preview
                .map(|value| value.to_string())
                .map_err(|e| e.user_message())
        });

        let prompt = (session.phase() == Phase::Resolved).then(|| reset_prompt(keys));

        Self {
            body,
            result,
            prompt,
        }
    }

    /// Drop the speculative result, keeping a finalized one
    pub fn without_preview(self) -> Self {
        if self.prompt.is_some() {
            return self;
        }
        Self {
            result: None,
            ..self
        }
    }

    /// The boxed result block, if there is a result to show
    pub fn result_block(&self) -> Option<String> {
        self.result.as_ref().map(|result| {
            let value = match result {
                Ok(value) => value.as_str(),
                Err(message) => message.as_str(),
            };
            format!("{}\n\t=      {}\n{}", RESULT_RULE, value, RESULT_FOOTER)
        })
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)?;
        if let Some(block) = self.result_block() {
            write!(f, "\n{}", block)?;
        }
        if let Some(ref prompt) = self.prompt {
            write!(f, "\n{}", prompt)?;
        }
        Ok(())
    }
}

pub fn reset_prompt(keys: &KeyBindings) -> String {
    format!(
        "Please press 'Ctrl + {}' to reset or 'Ctrl + {}' to close the calculator",
        keys.reset.to_ascii_uppercase(),
        keys.quit.to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Key;

    fn session_after(keys: &str) -> Session {
        let engine = Calculator::new();
        let mut session = Session::new();
        for c in keys.chars() {
            if let Some(key) = Key::from_char(c) {
                // Failed keystrokes leave the session as it was
                let _ = session.handle(&engine, key);
            }
        }
        session
    }

    fn readout(keys: &str) -> Readout {
        Readout::of(&session_after(keys), &Calculator::new(), &KeyBindings::default())
    }

    #[test]
    fn test_body_without_steps_shows_operands() {
        let readout = readout("12.5");
        assert_eq!(readout.body, "\t\t\n\t\t     12.5");
        assert!(readout.result.is_none());
        assert!(readout.prompt.is_none());
    }

    #[test]
    fn test_body_with_steps_shows_tape() {
        let readout = readout("5+3");
        assert_eq!(readout.body, "\t\t5\n\t+       3");
        assert_eq!(readout.result, Some(Ok("8".to_string())));
    }

    #[test]
    fn test_finalized_readout_has_prompt_and_result() {
        let readout = readout("5+3=");
        assert_eq!(readout.body, "\t\t5\n\t+\t3\n\t=       ");
        assert_eq!(readout.result, Some(Ok("8".to_string())));
        assert_eq!(
            readout.prompt.as_deref(),
            Some("Please press 'Ctrl + R' to reset or 'Ctrl + Q' to close the calculator")
        );
    }

    #[test]
    fn test_pending_division_by_zero_shows_message() {
        let readout = readout("9/0");
        assert_eq!(
            readout.result,
            Some(Err("Cannot perform division by zero.".to_string()))
        );
    }

    #[test]
    fn test_without_preview_keeps_final_result() {
        let pending = readout("5+3").without_preview();
        assert!(pending.result.is_none());

        let finalized = readout("5+3=").without_preview();
        assert_eq!(finalized.result, Some(Ok("8".to_string())));
    }

    #[test]
    fn test_display_joins_sections() {
        let text = readout("2*4").to_string();
        assert_eq!(
            text,
            "\t\t2\n\t*       4\n\t---------------\n\t=      8\n\t==============="
        );
    }

    #[test]
    fn test_prompt_follows_bindings() {
        let keys = KeyBindings {
            reset: 'n',
            quit: 'x',
        };
        assert_eq!(
            reset_prompt(&keys),
            "Please press 'Ctrl + N' to reset or 'Ctrl + X' to close the calculator"
        );
    }
}
