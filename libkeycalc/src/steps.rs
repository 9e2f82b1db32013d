//! Step log: the chronological tape of operands and the operators they were entered under

use crate::operation::Operator;

/// One committed entry on the tape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub operator: Operator,
}

/// Append-only record of steps, cleared only on reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` under `operator`; blank or whitespace-only text is dropped
    pub fn add(&mut self, text: &str, operator: Operator) {
        if text.trim().is_empty() {
            return;
        }

        self.steps.push(Step {
            text: text.to_string(),
            operator,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Render the tape, one `"<operator>\t<text>"` line per step
    ///
    /// The first line drops its operator column, whichever operator the
    /// first step was recorded under; only its text is shown. Returns `None`
    /// for an empty log.
    pub fn render(&self) -> Option<String> {
        let (first, rest) = self.steps.split_first()?;

        let mut lines = Vec::with_capacity(self.steps.len());
        lines.push(first.text.clone());
        lines.extend(
            rest.iter()
                .map(|step| format!("\t{}\t{}", step.operator, step.text)),
        );

        Some(lines.join("\n"))
    }
}
