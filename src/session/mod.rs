//! Session orchestration.
//!
//! This is the boundary-facing layer. It accepts already-parsed requests,
//! checks the scientific gate and operand rules, calls the engine, and
//! records successful calculations in the history.

mod controller;
mod error;
mod request;
mod snapshot;

pub use controller::Session;
pub use error::SessionError;
pub use request::{MemoryCommand, MemoryOutcome, Outcome, Request};
pub use snapshot::{SessionSnapshot, SNAPSHOT_VERSION};
