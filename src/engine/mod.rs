//! Pure calculation engine.
//!
//! This module contains the side-effect free core of the calculator:
//! - Arithmetic, scientific and statistical functions
//! - The typed operation catalogue (`BinaryOp`, `UnaryOp`, `Statistic`)
//! - The `CalcError` failure kinds
//!
//! Nothing in here holds state or knows about session modes. Every call
//! is reproducible from its inputs alone.

#[macro_use]
mod macros;

pub mod arithmetic;
mod error;
mod operation;
pub mod scientific;
pub mod statistics;

pub use error::CalcError;
pub use operation::{BinaryOp, Operation, StatValue, Statistic, UnaryOp};
pub use scientific::{FACTORIAL, FACTORIAL_LIMIT};
