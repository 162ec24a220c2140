// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use colored::Colorize;
use rustsha256::rsh::app::{self, AppError};
use std::io::IsTerminal;
use std::process::ExitCode;

fn error_prefix() -> String {
	if std::io::stderr().is_terminal() {
		"error:".red().bold().to_string()
	} else {
		"error:".to_string()
	}
}

fn main() -> ExitCode {
	match app::run() {
		Ok(outcome) => ExitCode::from(outcome.exit_code()),
		Err(err) => {
			match &err {
				// clap sends help and version to stdout, usage errors to stderr.
				AppError::Cli(inner) => {
					let _ = inner.print();
				}
				other => eprintln!("{} {}", error_prefix(), other),
			}
			ExitCode::from(err.exit_code())
		}
	}
}
