// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output data types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One output event recorded for a single program input.
///
/// `Absent` means the program read its next input without writing anything,
/// which is a different outcome from writing an empty line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Capture {
    /// Text written by the program, lines joined with `\n`
    Present(String),
    /// Nothing was written
    Absent,
}

impl Capture {
    pub fn is_absent(&self) -> bool {
        matches!(self, Capture::Absent)
    }

    /// Captured text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Capture::Present(text) => Some(text),
            Capture::Absent => None,
        }
    }

    /// Append a line, replacing the placeholder on the first write.
    pub(crate) fn push_line(&mut self, line: &str) {
        match self {
            Capture::Present(text) => {
                text.push('\n');
                text.push_str(line);
            }
            Capture::Absent => *self = Capture::Present(line.to_string()),
        }
    }
}

impl From<Option<String>> for Capture {
    fn from(value: Option<String>) -> Self {
        value.map_or(Capture::Absent, Capture::Present)
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capture::Absent => write!(f, "the program provided no output"),
            Capture::Present(text) if text.is_empty() => write!(f, "(empty)"),
            Capture::Present(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
