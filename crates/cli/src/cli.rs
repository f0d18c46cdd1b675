// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the `iopairs` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and check IO test files
#[derive(Parser, Debug)]
#[command(name = "iopairs", version, about = "Inspect and check IO test files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the arguments and test pairs parsed from an IO file
    Inspect {
        /// IO file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Report constructs that break or weaken a replay
    Check {
        /// IO file to check; relative paths resolve against the configured io_dir
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// End-of-input sentinel (overrides the config file)
        #[arg(long)]
        sentinel: Option<String>,

        /// Harness config file (TOML)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Output format for `inspect`
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per pair
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
