// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented console abstraction for programs under test.

use crate::terminal::{Terminal, ERROR_PREFIX};
use std::io::{self, BufRead, Write};

/// The console a line-oriented program talks to.
///
/// Write programs against this trait and hand them a [`Terminal`] in tests
/// and a [`StdConsole`] in production.
pub trait Console {
    /// Next input line without its terminator, `None` at end of stream
    fn read_line(&self) -> Option<String>;

    /// Write one line of output
    fn print_line(&self, text: &str);

    /// Write one error line, prefixed with `"Error, "`
    fn print_error(&self, message: &str);
}

impl<C: Console + ?Sized> Console for &C {
    fn read_line(&self) -> Option<String> {
        (**self).read_line()
    }

    fn print_line(&self, text: &str) {
        (**self).print_line(text)
    }

    fn print_error(&self, message: &str) {
        (**self).print_error(message)
    }
}

impl Console for Terminal {
    fn read_line(&self) -> Option<String> {
        Terminal::read_line(self)
    }

    fn print_line(&self, text: &str) {
        Terminal::print_line(self, text)
    }

    fn print_error(&self, message: &str) {
        Terminal::print_error(self, message)
    }
}

/// Console backed by the process's stdin, stdout and stderr
#[derive(Clone, Copy, Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            }
        }
    }

    fn print_line(&self, text: &str) {
        let _ = writeln!(io::stdout().lock(), "{}", text);
    }

    fn print_error(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}{}", ERROR_PREFIX, message);
    }
}
