// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console capture for replaying interactive programs in tests.
//!
//! This crate provides the queue-backed [`Terminal`] shim that stands in for
//! stdin/stdout while a line-oriented program runs under test, and the
//! [`Console`] trait such programs are written against.

mod capture;
mod console;
mod terminal;

pub use capture::Capture;
pub use console::{Console, StdConsole};
pub use terminal::{Terminal, ERROR_PREFIX};
