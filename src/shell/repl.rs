//! The read-eval-print loop.

use crate::config::ShellConfig;
use crate::engine::{BinaryOp, Statistic, UnaryOp};
use crate::session::{MemoryCommand, Request, Session};
use crate::shell::command::Command;
use crate::shell::menu;
use crate::shell::prompt::{parse_non_negative_integer, Prompter};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Interactive calculator shell over any line source and sink.
///
/// The shell owns the session. It parses commands, collects operands,
/// hands fully parsed requests to the session and prints whatever comes
/// back. Only I/O failures end `run` early; calculation failures are
/// printed and the loop continues.
pub struct Shell<R, W> {
    session: Session,
    prompter: Prompter<R, W>,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            session: Session::new(config.scientific),
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        menu::render_banner(self.prompter.output())?;

        while self.session.is_running() {
            if self.config.show_menu {
                menu::render_menu(self.prompter.output(), self.session.mode())?;
            }

            let Some(line) = self.prompter.read_line("\nEnter your choice: ")? else {
                self.end_of_input();
                break;
            };

            match line.parse::<Command>() {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    debug!(input = %line.trim(), "unrecognised command");
                    writeln!(self.prompter.output(), "{err}")?;
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        if let Err(err) = self
            .session
            .check_permitted(command.name(), command.requires_scientific())
        {
            return writeln!(self.prompter.output(), "{err}");
        }

        match command {
            Command::Binary(op) => self.binary(op),
            Command::Unary(op) => self.unary(op),
            Command::Factorial => self.factorial(),
            Command::History(limit) => self.show_history(limit),
            Command::ClearHistory => {
                self.session.clear_history();
                writeln!(self.prompter.output(), "History cleared.")
            }
            Command::Memory => self.memory(),
            Command::ToggleScientific => {
                let enabled = self.session.toggle_scientific();
                let state = if enabled { "enabled" } else { "disabled" };
                writeln!(self.prompter.output(), "Scientific mode {state}.")
            }
            Command::Statistics => self.statistics(),
            Command::Export => self.export(),
            Command::Help => menu::render_help(self.prompter.output()),
            Command::Exit => {
                self.session.exit();
                writeln!(
                    self.prompter.output(),
                    "Thank you for using Reckon!"
                )
            }
        }
    }

    fn binary(&mut self, op: BinaryOp) -> io::Result<()> {
        let (first, second) = match op {
            BinaryOp::Percentage => ("Enter the value: ", "Enter the percentage: "),
            _ => ("Enter first number: ", "Enter second number: "),
        };

        let Some(lhs) = self.prompter.read_number(first)? else {
            self.end_of_input();
            return Ok(());
        };
        let Some(rhs) = self.prompter.read_number(second)? else {
            self.end_of_input();
            return Ok(());
        };

        self.execute(Request::Binary { op, lhs, rhs })
    }

    fn unary(&mut self, op: UnaryOp) -> io::Result<()> {
        let Some(value) = self.prompter.read_number("Enter number: ")? else {
            self.end_of_input();
            return Ok(());
        };

        self.execute(Request::Unary { op, value })
    }

    fn factorial(&mut self) -> io::Result<()> {
        let Some(line) = self.prompter.read_line("Enter a non-negative integer: ")? else {
            self.end_of_input();
            return Ok(());
        };

        match parse_non_negative_integer(&line) {
            Some(n) => self.execute(Request::Factorial { n }),
            None => writeln!(
                self.prompter.output(),
                "Please enter a valid non-negative integer."
            ),
        }
    }

    fn execute(&mut self, request: Request) -> io::Result<()> {
        match self.session.execute(request) {
            Ok(outcome) => writeln!(self.prompter.output(), "\n{outcome}"),
            Err(err) => writeln!(self.prompter.output(), "{err}"),
        }
    }

    fn show_history(&mut self, limit: Option<usize>) -> io::Result<()> {
        let records = match limit {
            Some(n) => self.session.recent(n),
            None => self.session.history(),
        };

        if self.session.history_len() == 0 {
            return writeln!(self.prompter.output(), "No calculations in history.");
        }

        let out = self.prompter.output();

        writeln!(out, "\n=== Calculation History ===")?;
        for (i, record) in records.iter().enumerate() {
            writeln!(out, "{}. {record}", i + 1)?;
        }
        Ok(())
    }

    fn memory(&mut self) -> io::Result<()> {
        menu::render_memory_menu(self.prompter.output())?;
        let Some(choice) = self.prompter.read_line("Choose memory operation: ")? else {
            self.end_of_input();
            return Ok(());
        };

        let prompt = match choice.trim() {
            "1" => Some("Enter value to store: "),
            "3" => Some("Enter value to add to memory: "),
            "4" => Some("Enter value to subtract from memory: "),
            "2" | "5" => None,
            _ => return writeln!(self.prompter.output(), "Invalid memory operation."),
        };

        let operand = match prompt {
            Some(prompt) => match self.prompter.read_number(prompt)? {
                Some(value) => value,
                None => {
                    self.end_of_input();
                    return Ok(());
                }
            },
            None => 0.0,
        };

        let command = match choice.trim() {
            "1" => MemoryCommand::Store(operand),
            "2" => MemoryCommand::Recall,
            "3" => MemoryCommand::Add(operand),
            "4" => MemoryCommand::Subtract(operand),
            _ => MemoryCommand::Clear,
        };

        match self.session.memory(command) {
            Ok(outcome) => writeln!(self.prompter.output(), "{outcome}"),
            Err(err) => writeln!(self.prompter.output(), "{err}"),
        }
    }

    fn statistics(&mut self) -> io::Result<()> {
        menu::render_statistics_menu(self.prompter.output())?;
        let Some(choice) = self.prompter.read_line("Choose statistical operation: ")? else {
            self.end_of_input();
            return Ok(());
        };

        let op = match choice.trim() {
            "1" => Statistic::Mean,
            "2" => Statistic::Median,
            "3" => Statistic::Mode,
            "4" => Statistic::StandardDeviation,
            _ => return writeln!(self.prompter.output(), "Invalid statistical operation."),
        };

        let numbers = self.prompter.read_number_list()?;
        self.execute(Request::Statistic { op, numbers })
    }

    fn export(&mut self) -> io::Result<()> {
        let snapshot = self.session.snapshot();
        match snapshot.to_json() {
            Ok(json) => writeln!(self.prompter.output(), "{json}"),
            Err(err) => {
                warn!(error = %err, "snapshot serialization failed");
                writeln!(self.prompter.output(), "Could not export session: {err}")
            }
        }
    }

    fn end_of_input(&mut self) {
        debug!("input closed");
        self.session.exit();
    }
}
