// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the binary.

use crate::env;
use crate::output_diagnostic::print_warning;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `IOPAIRS_LOG`.
///
/// Falls back to `default_level` when the variable is unset or invalid.
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(default_level: &str) {
    let filter = build_filter(env::log_filter().as_deref(), default_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn build_filter(directive: Option<&str>, default_level: &str) -> EnvFilter {
    match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            print_warning(format_args!(
                "ignoring invalid {} directive: {}",
                env::IOPAIRS_LOG,
                e
            ));
            EnvFilter::new(default_level)
        }
        None => EnvFilter::new(default_level),
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
