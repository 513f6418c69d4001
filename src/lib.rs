//! Reckon: an interactive console calculator
//!
//! Reckon follows a "pure core, imperative shell" layout. The calculation
//! engine is a set of pure functions with no side effects. Session state
//! (memory, history, mode flags) is owned by a single `Session`, and all
//! terminal I/O lives in the `shell` module.
//!
//! # Core Concepts
//!
//! - **Engine**: arithmetic, scientific and statistical functions in `engine`
//! - **State**: memory register, bounded history and session mode in `state`
//! - **Session**: routes parsed requests through the engine and records results
//! - **Shell**: the read-eval-print loop over any `BufRead` / `Write` pair
//!
//! # Example
//!
//! ```rust
//! use reckon::engine::BinaryOp;
//! use reckon::session::{Request, Session};
//!
//! let mut session = Session::default();
//! let outcome = session
//!     .execute(Request::Binary { op: BinaryOp::Divide, lhs: 10.0, rhs: 4.0 })
//!     .unwrap();
//!
//! assert_eq!(outcome.to_string(), "Division Result: 2.500000");
//! assert_eq!(session.history()[0].text, "10 / 4 = 2.500000");
//!
//! // Failures are reported and leave the history untouched
//! assert!(session
//!     .execute(Request::Binary { op: BinaryOp::Divide, lhs: 1.0, rhs: 0.0 })
//!     .is_err());
//! assert_eq!(session.history_len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod enforcement;
pub mod session;
pub mod shell;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use engine::{BinaryOp, CalcError, Operation, Statistic, UnaryOp};
pub use session::{Outcome, Request, Session, SessionError};
pub use state::{CalculationRecord, HistoryLog, MemoryRegister};
