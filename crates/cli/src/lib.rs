// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IO-file replay harness for line-oriented interactive programs.
//!
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod iofile;
pub mod logging;
pub mod output_diagnostic;
pub mod pair;
pub mod record;
pub mod replay;
pub mod suite;

pub use config::{ConfigError, HarnessConfig};
pub use iofile::{parse, IoFile, IoFileError, Lint, Severity};
pub use iopairs_capture::{Capture, Console, StdConsole, Terminal, ERROR_PREFIX};
pub use pair::{ComparisonMode, TestPair};
pub use record::{ErrorStyle, Recorder};
pub use replay::{ReplayError, Session};
pub use suite::{CaseOutcome, CaseStatus, Suite};
