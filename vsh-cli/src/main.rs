// SPDX-License-Identifier: AGPL-3.0-or-later
//! vsh
//!
//! An interactive shell over a zip archive mounted as a read-only virtual
//! filesystem.

mod commands;
mod config;
mod repl;
mod session;
mod shell;

use clap::Parser;
use console::style;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vsh_core::VshResult;

use crate::config::Config;
use crate::shell::{Control, Shell};

#[derive(Parser)]
#[command(name = "vsh")]
#[command(author, version, about = "Shell over a zip archive", long_about = None)]
struct Cli {
    /// TOML config naming the user, archive, log file and startup script
    config: PathBuf,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> VshResult<()> {
    let config = Config::load(&cli.config)?;
    let mut shell = Shell::new(&config)?;

    if let Some(script) = &config.startup_script {
        if shell.run_script(script, &mut io::stdout())? == Control::Exit {
            return Ok(());
        }
    }

    repl::run(&mut shell)
}
