// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Queue-backed terminal shim.

use crate::capture::Capture;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Prefix prepended to every message written through `print_error`
pub const ERROR_PREFIX: &str = "Error, ";

#[derive(Debug, Default)]
struct Queues {
    inputs: VecDeque<String>,
    outputs: VecDeque<Capture>,
    preamble: Vec<String>,
    reads: usize,
    exhausted: bool,
}

/// In-memory replacement for an interactive console.
///
/// The test driver queues inputs with [`Terminal::feed_input`] and drains
/// captures with [`Terminal::take_next_output`]; the program under test uses
/// [`Terminal::read_line`], [`Terminal::print_line`] and
/// [`Terminal::print_error`]. Clones share the same queues.
#[derive(Debug, Default)]
pub struct Terminal {
    queues: Arc<Mutex<Queues>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line for the program to read
    pub fn feed_input(&self, line: impl Into<String>) {
        self.queues.lock().inputs.push_back(line.into());
    }

    /// Pop the next pending input.
    ///
    /// Every successful read opens a new capture slot holding the `Absent`
    /// placeholder, so a program that writes nothing before its next read
    /// leaves a visible "no output" behind. Reading past the last input marks
    /// the terminal as exhausted and returns `None`.
    pub fn read_line(&self) -> Option<String> {
        let mut queues = self.queues.lock();
        match queues.inputs.pop_front() {
            Some(line) => {
                queues.outputs.push_back(Capture::Absent);
                queues.reads += 1;
                Some(line)
            }
            None => {
                if !queues.exhausted {
                    tracing::warn!(
                        reads = queues.reads,
                        "program read past the last scripted input"
                    );
                }
                queues.exhausted = true;
                None
            }
        }
    }

    /// Write a line of program output
    pub fn print_line(&self, text: impl AsRef<str>) {
        let mut guard = self.queues.lock();
        let queues = &mut *guard;
        let text = text.as_ref();
        match queues.outputs.back_mut() {
            Some(last) => last.push_line(text),
            None => queues.preamble.push(text.to_string()),
        }
    }

    /// Write an error message, prefixed with [`ERROR_PREFIX`]
    pub fn print_error(&self, message: impl AsRef<str>) {
        self.print_line(format!("{}{}", ERROR_PREFIX, message.as_ref()));
    }

    /// Pop the oldest capture, or `None` once every capture was consumed
    pub fn take_next_output(&self) -> Option<Capture> {
        self.queues.lock().outputs.pop_front()
    }

    /// Remove and return every capture not consumed yet
    pub fn drain_outputs(&self) -> Vec<Capture> {
        self.queues.lock().outputs.drain(..).collect()
    }

    /// Number of inputs the program has not read
    pub fn pending_inputs(&self) -> usize {
        self.queues.lock().inputs.len()
    }

    /// Number of captures not consumed yet
    pub fn pending_outputs(&self) -> usize {
        self.queues.lock().outputs.len()
    }

    /// Number of inputs the program has read since the last reset
    pub fn reads(&self) -> usize {
        self.queues.lock().reads
    }

    /// Lines written before the program's first read
    pub fn preamble(&self) -> Vec<String> {
        self.queues.lock().preamble.clone()
    }

    /// Whether the program tried to read with no input left
    pub fn is_exhausted(&self) -> bool {
        self.queues.lock().exhausted
    }

    /// Clear both queues and every flag
    pub fn reset(&self) {
        *self.queues.lock() = Queues::default();
    }
}

impl Clone for Terminal {
    fn clone(&self) -> Self {
        Self {
            queues: Arc::clone(&self.queues),
        }
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
