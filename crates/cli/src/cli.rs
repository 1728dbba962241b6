// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::discovery::DEFAULT_CFG_NAME;
use crate::init::InitOptions;

/// Read, edit and bootstrap notebook project settings
#[derive(Parser)]
#[command(name = "nbkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific settings file instead of searching for one
    #[arg(short = 'C', long = "config", global = true, env = "NBKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Settings file name to search for
    #[arg(long, global = true, env = "NBKIT_CFG_NAME", default_value = DEFAULT_CFG_NAME)]
    pub cfg_name: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new settings file
    Init(InitArgs),
    /// Print one setting
    Get(GetArgs),
    /// Change one setting and save
    Set(SetArgs),
    /// Print all settings
    List(ListArgs),
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Library (package) name
    pub lib_name: String,

    /// User or organization that owns the repository
    pub user: String,

    /// Directory to write the settings file into
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Default git branch [default: master]
    #[arg(long)]
    pub branch: Option<String>,

    /// Repository URL template; may use %(user)s and %(branch)s
    #[arg(long)]
    pub git_url: Option<String>,

    /// Use a custom documentation sidebar
    #[arg(long)]
    pub custom_sidebar: bool,

    /// Notebooks directory [default: nbs]
    #[arg(long)]
    pub nbs_path: Option<String>,

    /// Library source directory [default: %(lib_name)s]
    #[arg(long)]
    pub lib_path: Option<String>,

    /// Documentation directory [default: docs]
    #[arg(long)]
    pub doc_path: Option<String>,

    /// Test flags
    #[arg(long)]
    pub tst_flags: Option<String>,

    /// Initial library version [default: 0.0.1]
    #[arg(long = "lib-version", value_name = "VERSION")]
    pub lib_version: Option<String>,

    /// Overwrite an existing settings file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Options for `create_config`, with unset flags left at their defaults.
    pub fn options(&self, cfg_name: &str) -> InitOptions {
        let defaults = InitOptions::default();
        InitOptions {
            path: self.path.clone(),
            cfg_name: cfg_name.to_string(),
            branch: self.branch.clone().unwrap_or(defaults.branch),
            git_url: self.git_url.clone().unwrap_or(defaults.git_url),
            custom_sidebar: self.custom_sidebar,
            nbs_path: self.nbs_path.clone().unwrap_or(defaults.nbs_path),
            lib_path: self.lib_path.clone().unwrap_or(defaults.lib_path),
            doc_path: self.doc_path.clone().unwrap_or(defaults.doc_path),
            tst_flags: self.tst_flags.clone().unwrap_or(defaults.tst_flags),
            version: self.lib_version.clone().unwrap_or(defaults.version),
        }
    }
}

#[derive(clap::Args)]
pub struct GetArgs {
    /// Key to look up (case-insensitive)
    pub key: String,

    /// Print the stored value without %(name)s expansion
    #[arg(long, conflicts_with = "resolve")]
    pub raw: bool,

    /// Resolve the value as a path relative to the settings file
    #[arg(long)]
    pub resolve: bool,
}

#[derive(clap::Args)]
pub struct SetArgs {
    /// Key to set (case-insensitive)
    pub key: String,

    /// New value
    pub value: String,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print stored values without %(name)s expansion
    #[arg(long)]
    pub raw: bool,
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
