//! Sift CLI - filter product catalogs
//!
//! Usage: sift [OPTIONS] [COMMAND]
//!
//! Commands:
//!   colors  List the color tokens catalogs and --color accept

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use sift::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(Commands::Colors) => commands::cmd_colors(cli.json),
        None => commands::cmd_query(&cli.query, cli.json, cli.ascii, cli.verbose),
    }
}

/// Route log output to stderr so stdout stays parseable. Colors are used
/// only when stderr is a terminal.
///
/// `SIFT_LOG` takes filter directives (e.g. `sift=debug`); otherwise the
/// level follows the `-v` count.
fn init_tracing(verbose: u8) -> Result<()> {
    let filter = match std::env::var("SIFT_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
