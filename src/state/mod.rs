//! Session-owned mutable state.
//!
//! - `HistoryLog`: bounded log of successful calculations
//! - `MemoryRegister`: the single memory value
//! - `SessionMode`: running / scientific flags
//! - `Guard`: predicates consulted before dispatching requests
//!
//! None of these types are shared; the session owns one of each.

mod guard;
mod history;
mod memory;
mod mode;

pub use guard::Guard;
pub use history::{CalculationRecord, HistoryLog, HISTORY_CAPACITY};
pub use memory::MemoryRegister;
pub use mode::SessionMode;
