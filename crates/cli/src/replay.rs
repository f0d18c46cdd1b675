// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replay engine: feed scripted inputs, run the program, verify its captures.

use crate::config::HarnessConfig;
use crate::iofile::{IoFile, IoFileError};
use crate::pair::TestPair;
use iopairs_capture::{Capture, Terminal};
use std::path::Path;
use thiserror::Error;

/// Reasons a replay stops
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    IoFile(#[from] IoFileError),

    #[error("Input {index} ('{input}') is the reserved sentinel and cannot be scripted")]
    ReservedInput { index: usize, input: String },

    #[error(
        "The program read past the end of its input.\n\
         Either the script does not end with '{sentinel}' \
         or the program does not stop when it reads it."
    )]
    InputExhausted { sentinel: String },

    #[error(
        "The program quit too early at {pair}: {remaining} scripted input(s) were never read.\n\
         Check that the program resets all of its state between runs."
    )]
    QuitTooEarly {
        index: usize,
        pair: TestPair,
        remaining: usize,
    },

    #[error("Found no more output at {pair}. There is some serious issue!")]
    NoMoreOutput { index: usize, pair: TestPair },

    #[error("{message}")]
    Mismatch {
        index: usize,
        pair: TestPair,
        actual: Capture,
        message: String,
    },
}

impl ReplayError {
    /// Index of the pair the replay stopped at, if it got that far
    pub fn pair_index(&self) -> Option<usize> {
        match self {
            ReplayError::ReservedInput { index, .. }
            | ReplayError::QuitTooEarly { index, .. }
            | ReplayError::NoMoreOutput { index, .. }
            | ReplayError::Mismatch { index, .. } => Some(*index),
            ReplayError::IoFile(_) | ReplayError::InputExhausted { .. } => None,
        }
    }
}

/// One test driver's view of the harness.
///
/// A session owns the terminal shim its program talks to. Every run starts
/// and ends with the shim reset, so consecutive runs never see each other's
/// inputs or captures.
#[derive(Debug, Default)]
pub struct Session {
    terminal: Terminal,
    config: HarnessConfig,
    transcript: Vec<String>,
    leftover: Vec<Capture>,
}

impl Session {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            terminal: Terminal::new(),
            config,
            transcript: Vec::new(),
            leftover: Vec::new(),
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Handle for the program under test; shares this session's queues
    pub fn terminal(&self) -> Terminal {
        self.terminal.clone()
    }

    /// Log lines of the last run
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Captures the last failed run left unconsumed.
    ///
    /// Only filled when `show_all_program_output` is enabled.
    pub fn leftover_output(&self) -> &[Capture] {
        &self.leftover
    }

    /// Clear the shim and everything recorded about the last run
    pub fn reset(&mut self) {
        self.terminal.reset();
        self.transcript.clear();
        self.leftover.clear();
    }

    /// Load an IO file, resolving relative paths against `io_dir`
    pub fn load(&self, path: &Path) -> Result<IoFile, IoFileError> {
        IoFile::load(&self.config.io_path(path))
    }

    /// Replay the pairs of an IO file against `program`
    pub fn run_io_file<F: FnOnce()>(
        &mut self,
        path: &Path,
        program: F,
    ) -> Result<(), ReplayError> {
        let io = self.load(path)?;
        self.run_pairs(&io.pairs, program)
    }

    /// Replay `pairs` against `program`.
    ///
    /// All inputs plus the sentinel are queued before `program` is called;
    /// once it returns, captures are compared pair by pair and the first
    /// failure ends the run.
    pub fn run_pairs<F: FnOnce()>(
        &mut self,
        pairs: &[TestPair],
        program: F,
    ) -> Result<(), ReplayError> {
        self.reset();
        let result = self.replay(pairs, program);
        if result.is_err() && self.config.show_all_program_output {
            self.leftover = self.terminal.drain_outputs();
        }
        self.terminal.reset();
        result
    }

    fn replay<F: FnOnce()>(
        &mut self,
        pairs: &[TestPair],
        program: F,
    ) -> Result<(), ReplayError> {
        let sentinel = self.config.sentinel.clone();
        if let Some(index) = pairs.iter().position(|p| p.input == sentinel) {
            return Err(ReplayError::ReservedInput {
                index,
                input: sentinel,
            });
        }

        tracing::info!(pairs = pairs.len(), "starting replay");
        self.log(format!("Testing using {} pairs...", pairs.len()));

        for pair in pairs {
            self.terminal.feed_input(pair.input.as_str());
        }
        self.terminal.feed_input(sentinel.as_str());

        program();

        if self.terminal.is_exhausted() {
            tracing::warn!(sentinel = %sentinel, "program read past its last input");
            return Err(ReplayError::InputExhausted { sentinel });
        }
        let preamble = self.terminal.preamble();
        if !preamble.is_empty() {
            tracing::debug!(
                lines = preamble.len(),
                "ignoring output written before the first read"
            );
        }

        for (index, pair) in pairs.iter().enumerate() {
            let Some(actual) = self.terminal.take_next_output() else {
                // The sentinel is queued last, so it is unread whenever anything is.
                let remaining = self.terminal.pending_inputs().saturating_sub(1);
                self.log(format!("Testing {} Failed!", pair));
                tracing::warn!(
                    index,
                    remaining,
                    "program produced fewer outputs than expected"
                );
                return Err(if remaining > 0 {
                    ReplayError::QuitTooEarly {
                        index,
                        pair: pair.clone(),
                        remaining,
                    }
                } else {
                    ReplayError::NoMoreOutput {
                        index,
                        pair: pair.clone(),
                    }
                });
            };

            if !pair.check(&actual) {
                self.log(format!("Testing {} Failed!", pair));
                tracing::warn!(index, mode = %pair.mode, "output mismatch");
                return Err(ReplayError::Mismatch {
                    index,
                    message: pair.fail_message(&actual),
                    pair: pair.clone(),
                    actual,
                });
            }

            tracing::debug!(index, input = %pair.input, "pair passed");
            self.log(format!("Testing {} Passed!", pair));
        }

        self.log("Test successfully completed.".to_string());
        Ok(())
    }

    fn log(&mut self, line: String) {
        self.transcript.push(line);
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
