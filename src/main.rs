// Reckon interactive calculator
// Binary entry point: parse flags, set up logging, run the shell on stdio.

use anyhow::Context;
use clap::Parser;
use reckon::cli::Cli;
use reckon::config::ShellConfig;
use reckon::shell::Shell;
use reckon::telemetry::init_telemetry_with_level;
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ShellConfig::from(&cli);

    init_telemetry_with_level(&config.log_level);
    tracing::debug!(?config, version = env!("CARGO_PKG_VERSION"), "starting reckon");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdin.lock(), stdout.lock());
    shell.run().context("interactive session failed")?;

    Ok(())
}
