//! Line-based prompting with re-prompt on malformed input.

use std::io::{self, BufRead, Write};

/// Parse a finite number, ignoring surrounding whitespace.
///
/// `inf` and `NaN` are rejected even though `f64::from_str` accepts them.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a non-negative integer, ignoring surrounding whitespace.
pub fn parse_non_negative_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|n| *n >= 0)
}

/// Reads answers from `input` and writes prompts to `output`.
///
/// Every read returns `None` once the input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one line without its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt until a finite number is entered.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse_number(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output, "Please enter a valid number.")?;
        }
    }

    /// Read numbers one per line until an empty line or end of input.
    pub fn read_number_list(&mut self) -> io::Result<Vec<f64>> {
        writeln!(
            self.output,
            "Enter numbers (press Enter without input to finish):"
        )?;

        let mut numbers = Vec::new();
        loop {
            let prompt = format!("Number {}: ", numbers.len() + 1);
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };
            // Only a truly empty line ends the list; spaces are re-prompted.
            if line.is_empty() {
                break;
            }
            match parse_number(&line) {
                Some(value) => numbers.push(value),
                None => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
        Ok(numbers)
    }
}
