// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nbkit get`, `set` and `list` command implementations.

use std::io::Write;
use std::path::Path;
use std::sync::PoisonError;

use anyhow::Context;
use serde::Serialize;

use nbkit::cache::{self, SharedSettings};
use nbkit::cli::{Cli, GetArgs, ListArgs, OutputFormat, SetArgs};
use nbkit::discovery;
use nbkit::error::{Error, ExitCode};
use nbkit::ini::Values;

/// Find the settings file (explicit `-C` or discovery) and load it.
fn open(cli: &Cli) -> anyhow::Result<SharedSettings> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd, &cli.cfg_name)?;
    tracing::debug!("loading settings from {}", path.display());
    Ok(cache::global().get_or_load(&path)?)
}

pub fn get(cli: &Cli, args: &GetArgs) -> anyhow::Result<ExitCode> {
    let handle = open(cli)?;
    let settings = handle.read().unwrap_or_else(PoisonError::into_inner);

    let value = if args.raw {
        settings
            .get_raw(&args.key)
            .map(str::to_owned)
            .ok_or_else(|| Error::MissingKey {
                key: args.key.to_lowercase(),
                path: settings.path().to_path_buf(),
            })?
    } else if args.resolve {
        settings.get_path(&args.key)?.display().to_string()
    } else {
        settings.get_string(&args.key)?
    };

    println!("{value}");
    Ok(ExitCode::Success)
}

pub fn set(cli: &Cli, args: &SetArgs) -> anyhow::Result<ExitCode> {
    let handle = open(cli)?;
    let mut settings = handle.write().unwrap_or_else(PoisonError::into_inner);

    settings.set(&args.key, &args.value)?;
    settings
        .save()
        .with_context(|| format!("failed to save {}", settings.path().display()))?;
    tracing::debug!("set {} in {}", args.key, settings.path().display());
    Ok(ExitCode::Success)
}

#[derive(Serialize)]
struct ListOutput<'a> {
    path: &'a Path,
    values: &'a Values,
}

pub fn list(cli: &Cli, args: &ListArgs) -> anyhow::Result<ExitCode> {
    let handle = open(cli)?;
    let settings = handle.read().unwrap_or_else(PoisonError::into_inner);

    let resolved;
    let values = if args.raw {
        settings.values()
    } else {
        resolved = settings.resolved()?;
        &resolved
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for (key, value) in values {
                writeln!(out, "{key} = {value}")?;
            }
        }
        OutputFormat::Json => {
            let output = ListOutput {
                path: settings.path(),
                values,
            };
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(ExitCode::Success)
}
