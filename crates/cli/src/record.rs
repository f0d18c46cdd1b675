// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test creation: record a live session as an IO file.
//!
//! Wrap the console a program normally uses in a [`Recorder`], use the
//! program by hand, then save what happened. The saved file replays the same
//! session with the same expected outputs.

use crate::iofile::{ARGS_PREFIX, DEFAULT_SENTINEL, INPUT_PREFIX, STARTS_WITH_MARKER};
use iopairs_capture::{Console, ERROR_PREFIX};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// First line of every saved recording
pub const RECORDING_HEADER: &str = "Automatically created test";

/// How error messages are written into the recording
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorStyle {
    /// Record the full message
    #[default]
    Verbatim,
    /// Record `Error, ...` so any error message passes on replay
    Generic,
}

/// Console wrapper that records every interaction as IO-file text
#[derive(Debug)]
pub struct Recorder<C> {
    inner: C,
    sentinel: String,
    error_style: ErrorStyle,
    text: Mutex<String>,
}

impl<C: Console> Recorder<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            sentinel: DEFAULT_SENTINEL.to_string(),
            error_style: ErrorStyle::default(),
            text: Mutex::new(String::new()),
        }
    }

    /// Record the program's command-line arguments as the header line
    pub fn with_args<S: AsRef<str>>(self, args: &[S]) -> Self {
        if !args.is_empty() {
            let joined: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
            let mut text = self.text.lock();
            let body = std::mem::take(&mut *text);
            *text = format!("{}{}\n{}", ARGS_PREFIX, joined.join(" "), body);
        }
        self
    }

    /// Input that ends the session; it is not recorded
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_error_style(mut self, style: ErrorStyle) -> Self {
        self.error_style = style;
        self
    }

    /// The recording so far
    pub fn to_io_text(&self) -> String {
        self.text.lock().clone()
    }

    /// Write the recording, headed by [`RECORDING_HEADER`], to `path`
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let text = self.text.lock();
        let body = text.strip_suffix('\n').unwrap_or(&text);
        std::fs::write(path, format!("{}\n{}", RECORDING_HEADER, body))?;
        tracing::info!(path = %path.display(), "saved recorded session");
        Ok(())
    }

    /// Save into `dir` under a name like `testPairs_2026_01_31_12_00_00.io`
    pub fn save_timestamped(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let name = chrono::Local::now()
            .format("testPairs_%Y_%m_%d_%H_%M_%S.io")
            .to_string();
        let path = dir.join(name);
        self.save(&path)?;
        Ok(path)
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn push_line(&self, line: &str) {
        let mut text = self.text.lock();
        text.push_str(line);
        text.push('\n');
    }
}

impl<C: Console> Console for Recorder<C> {
    fn read_line(&self) -> Option<String> {
        let line = self.inner.read_line()?;
        if line != self.sentinel {
            self.push_line(&format!("{}{}", INPUT_PREFIX, line));
        }
        Some(line)
    }

    fn print_line(&self, text: &str) {
        self.inner.print_line(text);
        self.push_line(text);
    }

    fn print_error(&self, message: &str) {
        self.inner.print_error(message);
        match self.error_style {
            ErrorStyle::Verbatim => self.push_line(&format!("{}{}", ERROR_PREFIX, message)),
            ErrorStyle::Generic => {
                self.push_line(&format!("{}{}", ERROR_PREFIX, STARTS_WITH_MARKER))
            }
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
