//! Menu, submenu and help text.

use crate::state::{SessionMode, HISTORY_CAPACITY};
use std::io::{self, Write};

pub fn render_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Welcome to Reckon ===")?;
    writeln!(out, "Type 'help' for available commands")
}

pub fn render_menu(out: &mut impl Write, mode: &SessionMode) -> io::Result<()> {
    writeln!(out, "\n=== Calculator Menu ({} Mode) ===", mode.label())?;
    writeln!(out, "Basic Operations:")?;
    writeln!(out, "1) Add (+)")?;
    writeln!(out, "2) Subtract (-)")?;
    writeln!(out, "3) Multiply (*)")?;
    writeln!(out, "4) Divide (/)")?;
    writeln!(out, "5) Power (^)")?;
    writeln!(out, "6) Square Root (√)")?;
    writeln!(out, "7) Percentage (%)")?;

    if mode.is_scientific() {
        writeln!(out, "\nScientific Operations:")?;
        writeln!(out, "8) Sine (sin)")?;
        writeln!(out, "9) Cosine (cos)")?;
        writeln!(out, "10) Tangent (tan)")?;
        writeln!(out, "11) Logarithm (log)")?;
        writeln!(out, "12) Natural Log (ln)")?;
        writeln!(out, "13) Factorial (!)")?;
    }

    writeln!(out, "\nUtility Functions:")?;
    writeln!(out, "h) View History (h N for the last N)")?;
    writeln!(out, "c) Clear History")?;
    writeln!(out, "m) Memory Functions")?;
    writeln!(out, "s) Toggle Scientific Mode")?;
    writeln!(out, "stats) Statistical Functions")?;
    writeln!(out, "export) Export Session as JSON")?;
    writeln!(out, "help) Show Help")?;
    writeln!(out, "exit) Exit Program")
}

pub fn render_memory_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== Memory Operations ===")?;
    writeln!(out, "1) Memory Store (MS)")?;
    writeln!(out, "2) Memory Recall (MR)")?;
    writeln!(out, "3) Memory Add (M+)")?;
    writeln!(out, "4) Memory Subtract (M-)")?;
    writeln!(out, "5) Memory Clear (MC)")
}

pub fn render_statistics_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== Statistical Operations ===")?;
    writeln!(out, "1) Mean (Average)")?;
    writeln!(out, "2) Median")?;
    writeln!(out, "3) Mode")?;
    writeln!(out, "4) Standard Deviation")
}

pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== Calculator Help ===")?;
    writeln!(out, "Basic Operations: +, -, *, /, ^, √, %")?;
    writeln!(
        out,
        "Scientific Functions: sin, cos, tan, log, ln, ! (factorial)"
    )?;
    writeln!(out, "Memory: Store, recall, add, subtract, clear values")?;
    writeln!(
        out,
        "Statistics: Calculate mean, median, mode, standard deviation"
    )?;
    writeln!(out, "History: View and clear calculation history")?;
    writeln!(out, "Scientific Mode: Toggle advanced mathematical functions")?;
    writeln!(out, "\nTips:")?;
    writeln!(out, "- Use decimal numbers for precise calculations")?;
    writeln!(out, "- Memory operations persist throughout the session")?;
    writeln!(
        out,
        "- History shows your last {HISTORY_CAPACITY} calculations"
    )?;
    writeln!(out, "- Scientific functions work with radians")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn basic_menu_hides_scientific_operations() {
        let text = rendered(|out| render_menu(out, &SessionMode::new(false)));
        assert!(text.contains("(Basic Mode)"));
        assert!(!text.contains("Sine"));
    }

    #[test]
    fn scientific_menu_lists_scientific_operations() {
        let text = rendered(|out| render_menu(out, &SessionMode::new(true)));
        assert!(text.contains("(Scientific Mode)"));
        assert!(text.contains("13) Factorial (!)"));
    }

    #[test]
    fn help_mentions_history_capacity() {
        let text = rendered(|out| render_help(out));
        assert!(text.contains("last 50 calculations"));
    }
}
