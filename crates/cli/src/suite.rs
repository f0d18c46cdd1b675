// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suites of named replay cases with pass/fail accounting.

use crate::config::HarnessConfig;
use crate::pair::TestPair;
use crate::replay::{ReplayError, Session};
use iopairs_capture::{Capture, Terminal};
use std::path::Path;

/// Result of one case
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    /// Failed with the replay's diagnostic
    Failed(String),
}

/// Record of one finished case
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub status: CaseStatus,
    /// Run transcript, kept for failures or when `always_show_log` is set
    pub transcript: Vec<String>,
    /// Unconsumed captures, kept when `show_all_program_output` is set
    pub leftover: Vec<Capture>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

/// Runs cases one after another on a single session.
///
/// A failing case never stops the suite; each case starts from a reset
/// terminal.
#[derive(Debug, Default)]
pub struct Suite {
    session: Session,
    outcomes: Vec<CaseOutcome>,
}

impl Suite {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            session: Session::new(config),
            outcomes: Vec::new(),
        }
    }

    /// Terminal handle to give to programs under test
    pub fn terminal(&self) -> Terminal {
        self.session.terminal()
    }

    /// Run one case from in-memory pairs
    pub fn run_pairs<F: FnOnce()>(
        &mut self,
        name: &str,
        pairs: &[TestPair],
        program: F,
    ) -> bool {
        let result = self.session.run_pairs(pairs, program);
        self.record(name, result)
    }

    /// Run one case from an IO file
    pub fn run_io_file<F: FnOnce()>(
        &mut self,
        name: &str,
        path: &Path,
        program: F,
    ) -> bool {
        let result = self.session.run_io_file(path, program);
        self.record(name, result)
    }

    fn record(&mut self, name: &str, result: Result<(), ReplayError>) -> bool {
        let status = match result {
            Ok(()) => {
                tracing::info!(case = name, "case passed");
                CaseStatus::Passed
            }
            Err(e) => {
                tracing::warn!(case = name, error = %e, "case failed");
                CaseStatus::Failed(e.to_string())
            }
        };
        let passed = status == CaseStatus::Passed;
        let keep_log = !passed || self.session.config().always_show_log;

        self.outcomes.push(CaseOutcome {
            name: name.to_string(),
            status,
            transcript: if keep_log {
                self.session.transcript().to_vec()
            } else {
                Vec::new()
            },
            leftover: self.session.leftover_output().to_vec(),
        });
        self.session.reset();
        passed
    }

    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    /// Number of cases that passed
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of cases that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every case so far passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// One-line summary, e.g. `3 passed, 1 failed`
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed(), self.failed())
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# IO Test Report\n\n");

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Passed: {}\n", self.passed()));
        md.push_str(&format!("- Failed: {}\n", self.failed()));
        md.push('\n');

        if self.outcomes.is_empty() {
            return md;
        }

        md.push_str("## Cases\n\n");
        md.push_str("| Case | Status |\n");
        md.push_str("|------|--------|\n");
        for outcome in &self.outcomes {
            let icon = if outcome.passed() { "✅" } else { "❌" };
            md.push_str(&format!("| `{}` | {} |\n", outcome.name, icon));
        }
        md.push('\n');

        for outcome in &self.outcomes {
            if outcome.transcript.is_empty() && outcome.passed() {
                continue;
            }
            md.push_str(&format!("### {}\n\n", outcome.name));
            if let CaseStatus::Failed(message) = &outcome.status {
                md.push_str("```text\n");
                md.push_str(message);
                md.push_str("\n```\n\n");
            }
            if !outcome.transcript.is_empty() {
                md.push_str("Log:\n\n```text\n");
                for line in &outcome.transcript {
                    md.push_str(line);
                    md.push('\n');
                }
                md.push_str("```\n\n");
            }
            if !outcome.leftover.is_empty() {
                md.push_str("The output after that was:\n\n```text\n");
                for capture in &outcome.leftover {
                    md.push_str(&capture.to_string());
                    md.push('\n');
                }
                md.push_str("```\n\n");
            }
        }

        md
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
