//! Operand violations.

use std::fmt;
use thiserror::Error;

/// A single rule broken by a request's operands.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperandViolation {
    #[error("operand {position} is not a finite number ({value})")]
    NotFinite { position: usize, value: f64 },

    #[error("{message}")]
    Rejected { message: String },
}

/// Every violation found for one request, displayed as a `; ` separated list.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandViolations(pub Vec<OperandViolation>);

impl fmt::Display for OperandViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
