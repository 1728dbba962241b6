// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `nbkit init` command.

use anyhow::Result;

use nbkit::cli::{Cli, InitArgs};
use nbkit::error::ExitCode;
use nbkit::init::create_config;

/// Run the `init` command to create a settings file.
pub fn run(cli: &Cli, args: &InitArgs) -> Result<ExitCode> {
    let opts = args.options(&cli.cfg_name);
    let config_path = opts.config_path();

    if config_path.exists() && !args.force {
        eprintln!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
        return Ok(ExitCode::ConfigError);
    }

    let written = create_config(&args.lib_name, &args.user, &opts)?;
    println!("Created {}", written.display());
    Ok(ExitCode::Success)
}
