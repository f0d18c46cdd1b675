// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementations of the `inspect` and `check` subcommands.

use crate::cli::OutputFormat;
use crate::config::{ConfigError, HarnessConfig};
use crate::iofile::{IoFile, IoFileError, Lint, Severity};
use std::path::Path;
use thiserror::Error;

/// Errors that stop a subcommand before it produces a result
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    IoFile(#[from] IoFileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load `file` and render it in the requested format
pub fn inspect(file: &Path, format: OutputFormat) -> Result<String, CommandError> {
    let io = IoFile::load(file)?;
    match format {
        OutputFormat::Text => Ok(render_text(&io)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&io)?),
    }
}

/// Plain-text listing: optional args line, then one line per pair
pub fn render_text(io: &IoFile) -> String {
    let mut out = String::new();
    if let Some(args) = &io.args {
        out.push_str(&format!("args: {}\n", args.join(" ")));
    }
    out.push_str(&format!("pairs: {}\n", io.pairs.len()));
    for (index, pair) in io.pairs.iter().enumerate() {
        out.push_str(&format!("{:>4}  {:<11}  > {}\n", index + 1, pair.mode, pair.input));
        if let Some(expected) = &pair.expected {
            for line in expected.lines() {
                out.push_str(&format!("{:>4}  {:<11}    {}\n", "", "", line));
            }
        }
    }
    out
}

/// Outcome of `check`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub pairs: usize,
    pub lints: Vec<Lint>,
}

impl CheckReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.lints.iter().filter(|l| l.severity == severity).count()
    }

    /// One-line summary, e.g. `12 pairs, 0 errors, 1 warning`
    pub fn summary(&self) -> String {
        format!(
            "{} pairs, {} {}, {} {}",
            self.pairs,
            self.errors(),
            plural(self.errors(), "error"),
            self.warnings(),
            plural(self.warnings(), "warning"),
        )
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Lint `file` with the sentinel from `sentinel`, the config, or the default
pub fn check(
    file: &Path,
    sentinel: Option<&str>,
    config: Option<&Path>,
) -> Result<CheckReport, CommandError> {
    let config = HarnessConfig::resolve(config)?;
    let sentinel = sentinel.unwrap_or(&config.sentinel);
    let path = config.io_path(file);
    tracing::debug!(path = %path.display(), sentinel, "checking IO file");

    let io = IoFile::load(&path)?;
    Ok(CheckReport {
        pairs: io.pairs.len(),
        lints: io.lint(sentinel),
    })
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
