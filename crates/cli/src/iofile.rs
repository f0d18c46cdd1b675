// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IO-file parsing.
//!
//! An IO file scripts one session with an interactive program:
//!
//! ```text
//! ! --verbose data.txt
//! > add 1 2
//! 3
//! > list
//! item1
//! ...
//! > bad
//! Error, invalid input
//! > noop
//! ```
//!
//! The optional `! ` line carries command-line arguments. Every `> ` line is
//! one input; the lines up to the next input are the expected output. A block
//! with no output lines expects the program to print nothing, output starting
//! with `Error, ` only has to be an error, and `...` turns the text before it
//! into a required prefix.

use crate::pair::{ComparisonMode, TestPair};
use iopairs_capture::ERROR_PREFIX;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marks a line as program input
pub const INPUT_PREFIX: &str = "> ";

/// Marks the header line holding command-line arguments
pub const ARGS_PREFIX: &str = "! ";

/// Expected output containing this token only checks the text before it
pub const STARTS_WITH_MARKER: &str = "...";

/// Input appended after every script to end the program's input loop
pub const DEFAULT_SENTINEL: &str = "quit";

/// Errors that can occur when loading an IO file
#[derive(Debug, Error)]
pub enum IoFileError {
    #[error("Missing required IO file: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read IO file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed IO file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IoFile {
    /// Command-line arguments from the `! ` header line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Scripted interactions in file order
    pub pairs: Vec<TestPair>,
}

impl IoFile {
    /// Read and parse an IO file from disk
    pub fn load(path: &Path) -> Result<Self, IoFileError> {
        if !path.exists() {
            return Err(IoFileError::Missing {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| IoFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(parse(&content))
    }

    /// Check the script for constructs that break or weaken a replay
    pub fn lint(&self, sentinel: &str) -> Vec<Lint> {
        let mut lints = Vec::new();
        for (index, pair) in self.pairs.iter().enumerate() {
            if pair.input == sentinel {
                lints.push(Lint {
                    pair: index,
                    severity: Severity::Error,
                    message: format!(
                        "input '{}' is the reserved end-of-input sentinel",
                        sentinel
                    ),
                });
            }

            let expected = pair.expected.as_deref().unwrap_or("");
            match pair.mode {
                ComparisonMode::IsError
                    if expected.contains(STARTS_WITH_MARKER) && !is_generic_error(expected) =>
                {
                    lints.push(Lint {
                        pair: index,
                        severity: Severity::Warning,
                        message: format!(
                            "expected output starts with '{}' and contains '{}'; \
                             only the error prefix is checked",
                            ERROR_PREFIX, STARTS_WITH_MARKER
                        ),
                    });
                }
                ComparisonMode::StartsWith if expected.is_empty() => {
                    lints.push(Lint {
                        pair: index,
                        severity: Severity::Warning,
                        message: format!(
                            "nothing precedes '{}'; any output passes",
                            STARTS_WITH_MARKER
                        ),
                    });
                }
                _ => {}
            }
        }
        lints
    }
}

/// `Error, ...`, the form recordings use to accept any error message
fn is_generic_error(expected: &str) -> bool {
    expected
        .strip_prefix(ERROR_PREFIX)
        .is_some_and(|rest| rest == STARTS_WITH_MARKER)
}

/// How serious a lint finding is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in a parsed IO file
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lint {
    /// Index of the offending pair
    pub pair: usize,
    pub severity: Severity,
    pub message: String,
}

/// Parse IO-file text into its arguments and test pairs.
///
/// Lines before the first input line form a header; only an args line is
/// taken from it.
pub fn parse(text: &str) -> IoFile {
    let mut args = None;
    let mut pairs = Vec::new();
    let mut input: Option<String> = None;
    let mut output = String::new();

    for line in text.lines() {
        if let Some(next) = line.strip_prefix(INPUT_PREFIX) {
            if let Some(prev) = input.take() {
                pairs.push(classify(prev, &output));
            }
            input = Some(next.to_string());
            output.clear();
        } else if input.is_some() {
            output.push_str(line);
            output.push('\n');
        } else if args.is_none() {
            args = line
                .strip_prefix(ARGS_PREFIX)
                .map(|rest| rest.split(' ').map(str::to_string).collect());
        }
    }

    if let Some(prev) = input {
        pairs.push(classify(prev, &output));
    }

    IoFile { args, pairs }
}

/// Turn one block's accumulated output lines into a test pair.
///
/// Checks run in a fixed order: nothing at all, error prefix, `...` marker,
/// exact text.
pub fn classify(input: impl Into<String>, output: &str) -> TestPair {
    if output.is_empty() {
        return TestPair::no_output(input);
    }

    let output = output.strip_suffix('\n').unwrap_or(output);
    if output.starts_with(ERROR_PREFIX) {
        return TestPair::new(input, Some(output.to_string()), ComparisonMode::IsError);
    }
    if let Some((prefix, _)) = output.split_once(STARTS_WITH_MARKER) {
        return TestPair::starts_with(input, prefix);
    }
    TestPair::equals(input, output)
}

#[cfg(test)]
#[path = "iofile_tests.rs"]
mod tests;
