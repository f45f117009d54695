// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hayscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use hayscan::cli::{Cli, Command};
use hayscan::error::ExitCode;

mod cmd_search;

/// `HAYSCAN_LOG` takes an `EnvFilter` directive; logging is off without it.
fn init_logging() {
    let filter = EnvFilter::try_from_env("HAYSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> std::process::ExitCode {
    init_logging();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hayscan: {err}");
            err.downcast_ref::<hayscan::Error>()
                .map_or(ExitCode::InternalError, ExitCode::from)
        }
    };
    code.into()
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let code = match command {
        Command::Find(args) => cmd_search::find(&cli, args)?,
        Command::Delim(args) => cmd_search::delim(&cli, args)?,
    };
    tracing::debug!(code = code as u8, "exit");
    Ok(code)
}
