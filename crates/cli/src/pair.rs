// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted input/expected-output pairs and their comparison modes.

use iopairs_capture::{Capture, ERROR_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a captured output is compared against a pair's expectation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Output equals the expected text exactly
    Equals,
    /// Output begins with the expected text
    StartsWith,
    /// Output contains the expected text
    Contains,
    /// Output begins with the error prefix
    IsError,
    /// The program wrote nothing at all
    IsEmpty,
    /// Output is not checked
    Skip,
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComparisonMode::Equals => "EQUALS",
            ComparisonMode::StartsWith => "STARTS_WITH",
            ComparisonMode::Contains => "CONTAINS",
            ComparisonMode::IsError => "IS_ERROR",
            ComparisonMode::IsEmpty => "IS_EMPTY",
            ComparisonMode::Skip => "SKIP",
        };
        f.pad(name)
    }
}

/// One scripted interaction: the line fed to the program and what must come back
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPair {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    pub mode: ComparisonMode,
}

impl TestPair {
    pub fn new(input: impl Into<String>, expected: Option<String>, mode: ComparisonMode) -> Self {
        Self {
            input: input.into(),
            expected,
            mode,
        }
    }

    /// Expect exactly `output`
    pub fn equals(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::new(input, Some(output.into()), ComparisonMode::Equals)
    }

    /// Expect output beginning with `prefix`
    pub fn starts_with(input: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::new(input, Some(prefix.into()), ComparisonMode::StartsWith)
    }

    /// Expect output containing `needle`
    pub fn contains(input: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(input, Some(needle.into()), ComparisonMode::Contains)
    }

    /// Expect an error message
    pub fn error(input: impl Into<String>) -> Self {
        Self::new(input, None, ComparisonMode::IsError)
    }

    /// Expect no output at all
    pub fn no_output(input: impl Into<String>) -> Self {
        Self::new(input, None, ComparisonMode::IsEmpty)
    }

    /// Feed the input without checking what comes back
    pub fn skip(input: impl Into<String>) -> Self {
        Self::new(input, None, ComparisonMode::Skip)
    }

    fn expected_text(&self) -> &str {
        self.expected.as_deref().unwrap_or("")
    }

    /// Whether `actual` satisfies this pair
    pub fn check(&self, actual: &Capture) -> bool {
        match (self.mode, actual) {
            (ComparisonMode::Skip, _) => true,
            (ComparisonMode::IsEmpty, capture) => capture.is_absent(),
            (_, Capture::Absent) => false,
            (ComparisonMode::Equals, Capture::Present(text)) => text == self.expected_text(),
            (ComparisonMode::StartsWith, Capture::Present(text)) => {
                text.starts_with(self.expected_text())
            }
            (ComparisonMode::Contains, Capture::Present(text)) => {
                text.contains(self.expected_text())
            }
            (ComparisonMode::IsError, Capture::Present(text)) => text.starts_with(ERROR_PREFIX),
        }
    }

    /// Human-readable explanation of why `actual` failed this pair
    pub fn fail_message(&self, actual: &Capture) -> String {
        let mut msg = format!("Fail with {}", self);

        if self.mode == ComparisonMode::IsEmpty {
            let shown = match actual {
                Capture::Present(text) if text.is_empty() => "(empty string)",
                Capture::Present(text) => text.as_str(),
                Capture::Absent => "(no output)",
            };
            msg.push_str("\nOutput should have been empty but was: ");
            msg.push_str(shown);
            return msg;
        }

        let expected = match self.mode {
            ComparisonMode::IsError => Some(ERROR_PREFIX),
            _ => self.expected.as_deref(),
        };
        if let Some(expected) = expected {
            msg.push_str(&format!(
                "\nExpected ({}):{}{}",
                self.mode,
                separator(expected),
                expected
            ));
        }

        match actual {
            Capture::Absent => msg.push_str("\nThe program provided no output for that command"),
            Capture::Present(text) => {
                msg.push_str("\nOutput was:");
                msg.push_str(separator(text));
                msg.push_str(text);
                if text.is_empty() {
                    msg.push_str("(empty)");
                }
            }
        }
        msg
    }
}

fn separator(text: &str) -> &'static str {
    if text.contains('\n') {
        "\n"
    } else {
        " "
    }
}

impl fmt::Display for TestPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generic_error = self.mode == ComparisonMode::IsError
            && self
                .expected
                .as_deref()
                .is_none_or(|e| e == format!("{}...", ERROR_PREFIX));
        match self.expected.as_deref() {
            Some(expected) if !generic_error && self.mode != ComparisonMode::IsEmpty => {
                let first = expected.lines().next().unwrap_or("");
                let more = if expected.contains('\n') { "..." } else { "" };
                write!(
                    f,
                    "TestPair{{'{}'->'{}'{} @{}}}",
                    self.input, first, more, self.mode
                )
            }
            _ => write!(f, "TestPair{{'{}' @{}}}", self.input, self.mode),
        }
    }
}

#[cfg(test)]
#[path = "pair_tests.rs"]
mod tests;
