//! Session controller: routes requests into the engine and owns state.

use crate::engine::{scientific, BinaryOp, CalcError, Operation, StatValue};
use crate::enforcement::{OperandRules, OperandViolations};
use crate::session::error::SessionError;
use crate::session::request::{MemoryCommand, MemoryOutcome, Outcome, Request};
use crate::session::snapshot::{SessionSnapshot, SNAPSHOT_VERSION};
use crate::state::{CalculationRecord, Guard, HistoryLog, MemoryRegister, SessionMode};
use chrono::Local;
use tracing::{debug, info, warn};

/// One calculator session.
///
/// The session owns the memory register, the history log and the mode
/// flags. Requests either succeed completely (result computed, history
/// recorded) or fail without changing any state.
pub struct Session {
    mode: SessionMode,
    memory: MemoryRegister,
    history: HistoryLog,
    scientific_gate: Guard<SessionMode>,
    operand_rules: OperandRules,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Session {
    /// Create a running session, optionally starting in scientific mode.
    pub fn new(scientific: bool) -> Self {
        Self {
            mode: SessionMode::new(scientific),
            memory: MemoryRegister::new(),
            history: HistoryLog::new(),
            scientific_gate: Guard::new(|mode: &SessionMode| mode.is_scientific()),
            operand_rules: OperandRules::new().require_finite(),
        }
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode.is_running()
    }

    pub fn is_scientific(&self) -> bool {
        self.mode.is_scientific()
    }

    /// Flip scientific mode, returning the new setting.
    pub fn toggle_scientific(&mut self) -> bool {
        let enabled = self.mode.toggle_scientific();
        info!(enabled, "scientific mode toggled");
        enabled
    }

    /// End the session.
    pub fn exit(&mut self) {
        info!(calculations = self.history.count(), "session ending");
        self.mode.stop();
    }

    /// Check the scientific gate for an operation before collecting its
    /// operands.
    pub fn check_permitted(
        &self,
        operation: &'static str,
        scientific: bool,
    ) -> Result<(), SessionError> {
        if scientific && !self.scientific_gate.check(&self.mode) {
            debug!(operation, "blocked by scientific gate");
            return Err(SessionError::ScientificModeDisabled { operation });
        }
        Ok(())
    }

    /// Execute a calculation request.
    ///
    /// On success the calculation is appended to the history. On failure
    /// nothing is recorded and the session carries on.
    pub fn execute(&mut self, request: Request) -> Result<Outcome, SessionError> {
        let operation = request.name();
        self.check_permitted(operation, request.is_scientific())?;

        if let Request::Statistic { numbers, .. } = &request {
            if numbers.is_empty() {
                return Err(SessionError::NoNumbersEntered);
            }
        }

        let violations = self.operand_rules.violations(&request.operands());
        if !violations.is_empty() {
            warn!(operation, count = violations.len(), "operands rejected");
            return Err(SessionError::InvalidOperands {
                operation,
                violations: OperandViolations(violations),
            });
        }

        let (outcome, description) = compute(&request).map_err(|source| {
            warn!(operation, kind = source.kind(), "calculation failed");
            SessionError::Calculation { operation, source }
        })?;

        debug!(operation, %description, "calculation recorded");
        self.history.record(description);
        Ok(outcome)
    }

    /// Apply a memory register command.
    ///
    /// Operands must be finite, and M+ / M- are refused when the new value
    /// would not be finite. A refused command leaves the register as it was.
    pub fn memory(&mut self, command: MemoryCommand) -> Result<MemoryOutcome, SessionError> {
        let current = self.memory.recall();
        let operation = command.name();

        let violations = match command {
            MemoryCommand::Store(value) => self.operand_rules.violations(&[value]),
            MemoryCommand::Add(value) => memory_rules(|v, current| current + v)
                .violations(&[value, current]),
            MemoryCommand::Subtract(value) => memory_rules(|v, current| current - v)
                .violations(&[value, current]),
            MemoryCommand::Recall | MemoryCommand::Clear => Vec::new(),
        };
        if !violations.is_empty() {
            warn!(operation, "memory command rejected");
            return Err(SessionError::InvalidOperands {
                operation,
                violations: OperandViolations(violations),
            });
        }

        let outcome = match command {
            MemoryCommand::Store(value) => {
                self.memory.store(value);
                MemoryOutcome::Stored(value)
            }
            MemoryCommand::Recall => MemoryOutcome::Recalled(current),
            MemoryCommand::Add(operand) => {
                self.memory.accumulate(operand);
                MemoryOutcome::Added {
                    operand,
                    value: self.memory.recall(),
                }
            }
            MemoryCommand::Subtract(operand) => {
                self.memory.deaccumulate(operand);
                MemoryOutcome::Subtracted {
                    operand,
                    value: self.memory.recall(),
                }
            }
            MemoryCommand::Clear => {
                self.memory.clear();
                MemoryOutcome::Cleared
            }
        };
        debug!(operation, value = self.memory.recall(), "memory updated");
        Ok(outcome)
    }

    pub fn memory_register(&self) -> &MemoryRegister {
        &self.memory
    }

    /// Every history record, oldest first.
    pub fn history(&self) -> Vec<CalculationRecord> {
        self.history.all()
    }

    /// The most recent `n` history records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<CalculationRecord> {
        self.history.last(n)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("history cleared");
    }

    pub fn history_len(&self) -> usize {
        self.history.count()
    }

    /// Capture a serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Local::now(),
            scientific: self.mode.is_scientific(),
            memory: self.memory.recall(),
            history: self.history.all(),
        }
    }
}

/// Rules for M+ / M-: operand `[0]` must be finite and applying it to the
/// current value `[1]` must stay finite.
fn memory_rules(apply: fn(f64, f64) -> f64) -> OperandRules {
    OperandRules::new().require_finite().require_pred(
        move |operands: &[f64]| apply(operands[0], operands[1]).is_finite(),
        "memory value would no longer be finite",
    )
}

/// Run the request through the engine, returning the outcome and the text
/// recorded in history.
fn compute(request: &Request) -> Result<(Outcome, String), CalcError> {
    let operation = request.name();
    match request {
        Request::Binary { op, lhs, rhs } => {
            let value = op.apply(*lhs, *rhs)?;
            let description = match op {
                BinaryOp::Percentage => format!("{rhs}% of {lhs} = {value:.6}"),
                _ => format!("{lhs} {} {rhs} = {value:.6}", op.symbol()),
            };
            Ok((Outcome::Number { operation, value }, description))
        }
        Request::Unary { op, value: input } => {
            let value = op.apply(*input)?;
            let description = format!("{}({input}) = {value:.6}", op.name());
            Ok((Outcome::Number { operation, value }, description))
        }
        Request::Factorial { n } => {
            let value = scientific::factorial(*n)?;
            Ok((Outcome::Integer { operation, value }, format!("{n}! = {value}")))
        }
        Request::Statistic { op, numbers } => {
            let value = op.apply(numbers)?;
            let rendered = match &value {
                StatValue::Single(v) => format!("{v:.6}"),
                StatValue::Many(values) => values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            let description = format!("{operation} of {} numbers = {rendered}", numbers.len());
            Ok((Outcome::Statistic { operation, value }, description))
        }
    }
}
