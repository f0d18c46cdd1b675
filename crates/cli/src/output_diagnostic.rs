// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Provides ANSI color support with automatic terminal detection.

use crate::iofile::{Lint, Severity};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print one lint finding to stderr, colored by severity.
///
/// Pairs are numbered from 1 to match `inspect` output.
pub fn print_lint(file: &Path, lint: &Lint) {
    let is_tty = io::stderr().is_terminal();
    write_lint(&mut io::stderr(), file, lint, is_tty);
}

fn write_lint<W: Write>(writer: &mut W, file: &Path, lint: &Lint, is_terminal: bool) {
    let msg = format!("{}: pair {}: {}", file.display(), lint.pair + 1, lint.message);
    match lint.severity {
        Severity::Error => write_error(writer, msg, is_terminal),
        Severity::Warning => write_warning(writer, msg, is_terminal),
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
