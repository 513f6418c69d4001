//! Validation-based operand enforcement.
//!
//! Operands are checked with Stillwater's `Validation` type so that every
//! violation is collected instead of stopping at the first one. The session
//! runs these rules before calling the engine and before touching memory.

pub mod rules;
pub mod violations;

pub use rules::{Enforcement, OperandRules};
pub use violations::{OperandViolation, OperandViolations};
