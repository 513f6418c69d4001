//! Command-line arguments.

use crate::config::DEFAULT_LOG_LEVEL;
use clap::Parser;

/// Reckon interactive calculator
///
/// Basic arithmetic, scientific functions, a memory register, calculation
/// history and descriptive statistics in one terminal session.
#[derive(Parser, Debug)]
#[command(name = "reckon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Start with scientific functions enabled
    #[arg(long, env = "RECKON_SCIENTIFIC")]
    pub scientific: bool,

    /// Do not redraw the menu before every command
    #[arg(long, env = "RECKON_NO_MENU")]
    pub no_menu: bool,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, value_name = "LEVEL", env = "RECKON_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
