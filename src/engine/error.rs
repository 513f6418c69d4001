//! Calculation failure kinds.

use thiserror::Error;

/// Errors raised by the calculation engine.
///
/// Every variant is recoverable. The engine raises them before any state
/// is touched, so a failed calculation never leaves partial results behind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// Divisor magnitude below the division epsilon.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Input lies outside the domain of the function.
    #[error("{operation} is only defined for {domain}")]
    InvalidDomain {
        operation: &'static str,
        domain: &'static str,
    },

    /// Result would not fit the integer result type.
    #[error("{operation} of {value} is too large to calculate (maximum supported: {limit})")]
    Overflow {
        operation: &'static str,
        value: i64,
        limit: i64,
    },

    /// Statistical operation invoked on an empty sequence.
    #[error("Cannot calculate {operation} of empty list")]
    EmptyInput { operation: &'static str },
}

impl CalcError {
    /// Short name of the failure kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DivisionByZero",
            Self::InvalidDomain { .. } => "InvalidDomain",
            Self::Overflow { .. } => "Overflow",
            Self::EmptyInput { .. } => "EmptyInput",
        }
    }
}
