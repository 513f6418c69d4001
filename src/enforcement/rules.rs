//! Operand rules checked with `Validation`.

use crate::enforcement::violations::OperandViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of enforcing a set of rules.
pub type Enforcement = Validation<(), NonEmptyVec<OperandViolation>>;

/// Type alias for custom operand checks.
pub type OperandCheck = Box<dyn Fn(&[f64]) -> Enforcement + Send + Sync>;

/// Rules applied to the operands of a request before it is dispatched.
///
/// Every rule runs, and every violation is reported, so a user who typed
/// several bad values hears about all of them at once.
///
/// # Example
///
/// ```rust
/// use reckon::enforcement::OperandRules;
///
/// let rules = OperandRules::new().require_finite();
///
/// assert!(rules.enforce(&[1.0, 2.0]).is_success());
/// assert!(rules.enforce(&[f64::NAN, f64::INFINITY]).is_failure());
/// ```
#[derive(Default)]
pub struct OperandRules {
    require_finite: bool,
    required_checks: Vec<OperandCheck>,
}

impl OperandRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject NaN and infinite operands.
    pub fn require_finite(mut self) -> Self {
        self.require_finite = true;
        self
    }

    /// Add a simple predicate check with error message.
    pub fn require_pred<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&[f64]) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.required_checks.push(Box::new(move |operands: &[f64]| {
            if predicate(operands) {
                Validation::success(())
            } else {
                Validation::fail(OperandViolation::Rejected {
                    message: message.clone(),
                })
            }
        }));
        self
    }

    /// Enforce all rules, accumulating every violation.
    pub fn enforce(&self, operands: &[f64]) -> Enforcement {
        let mut checks: Vec<Enforcement> = Vec::new();

        if self.require_finite {
            for (index, value) in operands.iter().enumerate() {
                let check = if value.is_finite() {
                    Validation::success(())
                } else {
                    Validation::fail(OperandViolation::NotFinite {
                        position: index + 1,
                        value: *value,
                    })
                };
                checks.push(check);
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(operands));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Enforce all rules and collect the violations into a plain vector.
    pub fn violations(&self, operands: &[f64]) -> Vec<OperandViolation> {
        match self.enforce(operands) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_operands_pass() {
        let rules = OperandRules::new().require_finite();
        assert!(rules.enforce(&[1.0, -2.5, 0.0]).is_success());
        assert!(rules.enforce(&[]).is_success());
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = OperandRules::new()
            .require_finite()
            .require_pred(|_| false, "always rejected");

        let result = rules.enforce(&[f64::NAN, 3.0, f64::NEG_INFINITY]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                let not_finite: Vec<usize> = errors
                    .iter()
                    .filter_map(|e| match e {
                        OperandViolation::NotFinite { position, .. } => Some(*position),
                        _ => None,
                    })
                    .collect();
                assert_eq!(not_finite, vec![1, 3]);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, OperandViolation::Rejected { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unconfigured_rules_accept_anything() {
        let rules = OperandRules::new();
        assert!(rules.enforce(&[f64::NAN]).is_success());
    }

    #[test]
    fn custom_predicate_sees_operands() {
        let rules = OperandRules::new().require_pred(
            |ops: &[f64]| ops.iter().sum::<f64>().is_finite(),
            "sum overflows",
        );

        assert!(rules.enforce(&[1.0, 2.0]).is_success());
        assert_eq!(
            rules.violations(&[f64::MAX, f64::MAX]),
            vec![OperandViolation::Rejected {
                message: "sum overflows".to_string()
            }]
        );
    }
}
