//! Parsing of top-level shell commands.

use crate::engine::{BinaryOp, Operation, UnaryOp, FACTORIAL};
use std::str::FromStr;
use thiserror::Error;

/// A command typed at the main prompt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Factorial,
    /// Show the history; `Some(n)` limits it to the last `n` records.
    History(Option<usize>),
    ClearHistory,
    Memory,
    ToggleScientific,
    Statistics,
    Export,
    Help,
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary(op) => op.name(),
            Self::Unary(op) => op.name(),
            Self::Factorial => FACTORIAL,
            Self::History(_) => "History",
            Self::ClearHistory => "Clear History",
            Self::Memory => "Memory",
            Self::ToggleScientific => "Toggle Scientific Mode",
            Self::Statistics => "Statistics",
            Self::Export => "Export",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }

    /// Whether the command is hidden behind scientific mode.
    pub fn requires_scientific(&self) -> bool {
        match self {
            Self::Binary(op) => op.is_scientific(),
            Self::Unary(op) => op.is_scientific(),
            Self::Factorial => true,
            _ => false,
        }
    }
}

/// Errors produced when the main prompt input is not a command.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseCommandError {
    #[error("Please enter a valid option.")]
    Empty,

    #[error("Invalid choice. Type 'help' for available commands.")]
    Unknown { input: String },

    #[error("History count must be a non-negative integer, got '{value}'.")]
    InvalidCount { value: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let mut words = input.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let argument = words.next();
        let unknown = || ParseCommandError::Unknown {
            input: input.clone(),
        };

        if matches!(word, "h" | "history") {
            if words.next().is_some() {
                return Err(unknown());
            }
            return match argument {
                None => Ok(Self::History(None)),
                Some(value) => value
                    .parse::<usize>()
                    .map(|n| Self::History(Some(n)))
                    .map_err(|_| ParseCommandError::InvalidCount {
                        value: value.to_string(),
                    }),
            };
        }

        if argument.is_some() {
            return Err(unknown());
        }

        let command = match word {
            "1" | "+" => Self::Binary(BinaryOp::Add),
            "2" | "-" => Self::Binary(BinaryOp::Subtract),
            "3" | "*" => Self::Binary(BinaryOp::Multiply),
            "4" | "/" => Self::Binary(BinaryOp::Divide),
            "5" | "^" => Self::Binary(BinaryOp::Power),
            "6" | "√" | "sqrt" => Self::Unary(UnaryOp::SquareRoot),
            "7" | "%" => Self::Binary(BinaryOp::Percentage),
            "8" | "sin" => Self::Unary(UnaryOp::Sine),
            "9" | "cos" => Self::Unary(UnaryOp::Cosine),
            "10" | "tan" => Self::Unary(UnaryOp::Tangent),
            "11" | "log" => Self::Unary(UnaryOp::Log10),
            "12" | "ln" => Self::Unary(UnaryOp::NaturalLog),
            "13" | "!" => Self::Factorial,
            "c" | "clear" => Self::ClearHistory,
            "m" | "memory" => Self::Memory,
            "s" | "scientific" => Self::ToggleScientific,
            "stats" => Self::Statistics,
            "export" => Self::Export,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}
