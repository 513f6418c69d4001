//! Session-level errors reported back to the shell.

use crate::engine::CalcError;
use crate::enforcement::OperandViolations;
use thiserror::Error;

/// Errors that can occur while handling a session request.
///
/// None of these end the session. They are shown to the user and the
/// shell reads the next command.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Enable Scientific Mode to use this function.")]
    ScientificModeDisabled { operation: &'static str },

    #[error("No numbers entered.")]
    NoNumbersEntered,

    #[error("Invalid input for {}: {violations}", .operation.to_lowercase())]
    InvalidOperands {
        operation: &'static str,
        violations: OperandViolations,
    },

    #[error("Error performing {}: {}", .operation.to_lowercase(), .source)]
    Calculation {
        operation: &'static str,
        #[source]
        source: CalcError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::OperandViolation;

    #[test]
    fn calculation_error_names_operation() {
        let err = SessionError::Calculation {
            operation: "Division",
            source: CalcError::DivisionByZero,
        };
        assert_eq!(
            err.to_string(),
            "Error performing division: Cannot divide by zero"
        );
    }

    #[test]
    fn invalid_operands_lists_violations() {
        let err = SessionError::InvalidOperands {
            operation: "Memory Add",
            violations: OperandViolations(vec![OperandViolation::Rejected {
                message: "result would not be finite".to_string(),
            }]),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input for memory add: result would not be finite"
        );
    }

    #[test]
    fn gate_message_tells_user_what_to_do() {
        let err = SessionError::ScientificModeDisabled { operation: "Sine" };
        assert_eq!(
            err.to_string(),
            "Enable Scientific Mode to use this function."
        );
    }
}
