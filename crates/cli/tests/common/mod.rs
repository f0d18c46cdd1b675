// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for replay integration tests.

#![allow(dead_code)]

use iopairs::Console;
use std::path::PathBuf;

/// Path to a file under `tests/fixtures/io`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/io")
        .join(name)
}

/// Small calculator used as the program under test.
///
/// Commands: `add A B`, `list`, `history`, `blank`, `noop`, `quit`.
/// All state lives inside the call, so every run starts fresh.
pub fn calculator(console: &impl Console) {
    let mut history: Vec<String> = Vec::new();
    while let Some(line) = console.read_line() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("quit") => break,
            Some("add") => {
                let nums: Result<Vec<i64>, _> = words.map(str::parse::<i64>).collect();
                match nums.as_deref() {
                    Ok([a, b]) => {
                        console.print_line(&(a + b).to_string());
                        history.push(format!("add {} {} = {}", a, b, a + b));
                    }
                    _ => console.print_error("invalid input"),
                }
            }
            Some("list") => {
                console.print_line("item1");
                console.print_line("item2");
            }
            Some("history") => {
                for entry in &history {
                    console.print_line(entry);
                }
            }
            Some("blank") => console.print_line(""),
            Some("noop") | None => {}
            Some(_) => console.print_error("unknown command"),
        }
    }
}

/// Echo-style program that keeps its history across runs
#[derive(Default)]
pub struct LeakyCalculator {
    history: std::cell::RefCell<Vec<String>>,
}

impl LeakyCalculator {
    pub fn run(&self, console: &impl Console) {
        while let Some(line) = console.read_line() {
            match line.as_str() {
                "quit" => break,
                "history" => {
                    for entry in self.history.borrow().iter() {
                        console.print_line(entry);
                    }
                }
                other => {
                    console.print_line("ok");
                    self.history.borrow_mut().push(other.to_string());
                }
            }
        }
    }
}
