//! Requests accepted by the session and the outcomes it produces.

use crate::engine::{BinaryOp, Operation, StatValue, Statistic, UnaryOp, FACTORIAL};
use std::fmt;

/// A calculation request with already-parsed operands.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Binary { op: BinaryOp, lhs: f64, rhs: f64 },
    Unary { op: UnaryOp, value: f64 },
    Factorial { n: i64 },
    Statistic { op: Statistic, numbers: Vec<f64> },
}

impl Request {
    /// Display name of the requested operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary { op, .. } => op.name(),
            Self::Unary { op, .. } => op.name(),
            Self::Factorial { .. } => FACTORIAL,
            Self::Statistic { op, .. } => op.name(),
        }
    }

    pub fn is_scientific(&self) -> bool {
        match self {
            Self::Binary { op, .. } => op.is_scientific(),
            Self::Unary { op, .. } => op.is_scientific(),
            Self::Factorial { .. } => true,
            Self::Statistic { op, .. } => op.is_scientific(),
        }
    }

    /// Floating point operands subject to enforcement.
    pub(crate) fn operands(&self) -> Vec<f64> {
        match self {
            Self::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            Self::Unary { value, .. } => vec![*value],
            Self::Factorial { .. } => Vec::new(),
            Self::Statistic { numbers, .. } => numbers.clone(),
        }
    }
}

/// Successful result of a calculation request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Number {
        operation: &'static str,
        value: f64,
    },
    Integer {
        operation: &'static str,
        value: i64,
    },
    Statistic {
        operation: &'static str,
        value: StatValue,
    },
}

impl Outcome {
    /// The single numeric value of the outcome, if it has exactly one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Integer { value, .. } => Some(*value as f64),
            Self::Statistic {
                value: StatValue::Single(value),
                ..
            } => Some(*value),
            Self::Statistic { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { operation, value } => write!(f, "{operation} Result: {value:.6}"),
            Self::Integer { operation, value } => write!(f, "{operation} Result: {value}"),
            Self::Statistic { operation, value } => {
                write!(f, "{operation}: ")?;
                match value {
                    StatValue::Single(value) => write!(f, "{value:.6}"),
                    StatValue::Many(values) => {
                        let rendered: Vec<String> =
                            values.iter().map(|v| format!("{v:.6}")).collect();
                        f.write_str(&rendered.join(", "))
                    }
                }
            }
        }
    }
}

/// Memory register commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MemoryCommand {
    Store(f64),
    Recall,
    Add(f64),
    Subtract(f64),
    Clear,
}

impl MemoryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Store(_) => "Memory Store",
            Self::Recall => "Memory Recall",
            Self::Add(_) => "Memory Add",
            Self::Subtract(_) => "Memory Subtract",
            Self::Clear => "Memory Clear",
        }
    }
}

/// Confirmation of a memory command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MemoryOutcome {
    Stored(f64),
    Recalled(f64),
    Added { operand: f64, value: f64 },
    Subtracted { operand: f64, value: f64 },
    Cleared,
}

impl fmt::Display for MemoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored(value) => write!(f, "Value {value:.6} stored in memory."),
            Self::Recalled(value) => write!(f, "Memory value: {value:.6}"),
            Self::Added { operand, value } => {
                write!(f, "Added {operand:.6} to memory. New value: {value:.6}")
            }
            Self::Subtracted { operand, value } => write!(
                f,
                "Subtracted {operand:.6} from memory. New value: {value:.6}"
            ),
            Self::Cleared => f.write_str("Memory cleared."),
        }
    }
}
