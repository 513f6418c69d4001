//! Interactive shell.
//!
//! The shell is the imperative edge of the calculator: it reads lines,
//! rejects malformed input with a re-prompt, and only ever hands the
//! session fully parsed numbers.

pub mod command;
pub mod menu;
pub mod prompt;
mod repl;

pub use command::{Command, ParseCommandError};
pub use prompt::Prompter;
pub use repl::Shell;
