// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by iopairs are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `IOPAIRS_LOG` — tracing filter directive for the binary.
pub fn log_filter() -> Option<String> {
    std::env::var(names::IOPAIRS_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `IOPAIRS_CONFIG` — harness config file used when no `--config` is given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::IOPAIRS_CONFIG).ok().map(PathBuf::from)
}

/// `IOPAIRS_IO_DIR` — base directory for relative IO-file paths.
pub fn io_dir() -> Option<PathBuf> {
    std::env::var(names::IOPAIRS_IO_DIR).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
