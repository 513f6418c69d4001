//! Runtime settings for the interactive shell.

use crate::cli::Cli;

/// Default log filter when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings resolved from command-line flags and environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Start the session in scientific mode
    pub scientific: bool,

    /// Redraw the menu before every command
    pub show_menu: bool,

    /// Log filter directive passed to the tracing subscriber
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scientific: false,
            show_menu: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl From<&Cli> for ShellConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            scientific: cli.scientific,
            show_menu: !cli.no_menu,
            log_level: cli.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_show_menu_in_basic_mode() {
        let config = ShellConfig::default();
        assert!(!config.scientific);
        assert!(config.show_menu);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from(["reckon", "--scientific", "--no-menu", "--log-level", "debug"]);
        let config = ShellConfig::from(&cli);

        assert!(config.scientific);
        assert!(!config.show_menu);
        assert_eq!(config.log_level, "debug");
    }
}
