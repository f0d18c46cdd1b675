// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! iopairs binary entry point.

use std::io::Write;

use clap::Parser;

use iopairs::cli::{Cli, Command};
use iopairs::commands;
use iopairs::logging::init_tracing;
use iopairs::output_diagnostic::{print_error, print_lint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing("warn");
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Inspect { file, format } => match commands::inspect(&file, format) {
            Ok(text) => writeln!(stdout, "{}", text.trim_end_matches('\n'))?,
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        },
        Command::Check {
            file,
            sentinel,
            config,
        } => {
            let report = match commands::check(&file, sentinel.as_deref(), config.as_deref()) {
                Ok(report) => report,
                Err(e) => {
                    print_error(e);
                    std::process::exit(1);
                }
            };
            for lint in &report.lints {
                print_lint(&file, lint);
            }
            writeln!(stdout, "{}: {}", file.display(), report.summary())?;
            if report.errors() > 0 {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
