// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nbkit CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use nbkit::cli::{Cli, Command};
use nbkit::error::ExitCode;

mod cmd_init;
mod cmd_settings;

/// Filter directives for the stderr logger; unset means silent.
const LOG_ENV: &str = "NBKIT_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let code = run().unwrap_or_else(|err| report(&err));
    std::process::exit(code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    match command {
        Command::Init(args) => cmd_init::run(&cli, args),
        Command::Get(args) => cmd_settings::get(&cli, args),
        Command::Set(args) => cmd_settings::set(&cli, args),
        Command::List(args) => cmd_settings::list(&cli, args),
    }
}

/// Print `err` with its context chain and pick the exit code from the
/// underlying library error, if there is one.
fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("nbkit: {err:#}");
    err.chain()
        .find_map(|cause| cause.downcast_ref::<nbkit::Error>())
        .map_or(ExitCode::InternalError, ExitCode::from)
}
