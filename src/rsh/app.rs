// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rsh::error::DigestError;
use crate::rsh::hash::{digest_file, digest_unsized};
use crate::rsh::output::{format_check, format_line, OutputFormat};
use crate::rsh::sha256::Digest;
use clap::{crate_name, Arg, ArgAction};
use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Examples:
  rsh release.tar.gz            Print the SHA-256 digest and file name
  rsh -c <digest> release.tar.gz
                                Verify a file against a known digest
  cat data | rsh -              Hash standard input
{usage-heading} {usage}

{all-args}{after-help}
";

/// Where the bytes to hash come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
	Path(PathBuf),
	Stdin,
}

impl InputSource {
	pub fn display_name(&self) -> String {
		match self {
			InputSource::Path(path) => path.display().to_string(),
			InputSource::Stdin => "-".to_string(),
		}
	}
}

/// Parsed command line.
#[derive(Clone, Debug)]
pub struct DigestRequest {
	pub input: InputSource,
	pub format: OutputFormat,
	pub hash_only: bool,
	pub expected: Option<Digest>,
	pub verbose: bool,
}

impl DigestRequest {
	pub fn for_path(path: impl Into<PathBuf>) -> Self {
		Self {
			input: InputSource::Path(path.into()),
			format: OutputFormat::default(),
			hash_only: false,
			expected: None,
			verbose: false,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	Printed,
	Verified,
	Mismatch,
}

impl Outcome {
	pub fn exit_code(self) -> u8 {
		match self {
			Outcome::Printed | Outcome::Verified => 0,
			Outcome::Mismatch => 1,
		}
	}
}

#[derive(Debug)]
pub enum AppError {
	Cli(clap::Error),
	Digest(DigestError),
	Output(io::Error),
}

impl AppError {
	pub fn exit_code(&self) -> u8 {
		match self {
			AppError::Cli(err) => {
				u8::try_from(err.exit_code()).unwrap_or(2)
			}
			AppError::Digest(_) | AppError::Output(_) => 1,
		}
	}
}

impl fmt::Display for AppError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AppError::Cli(err) => write!(f, "{}", err),
			AppError::Digest(err) => write!(f, "{}", err),
			AppError::Output(err) => {
				write!(f, "failed to write output: {}", err)
			}
		}
	}
}

impl std::error::Error for AppError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			AppError::Cli(err) => Some(err),
			AppError::Digest(err) => Some(err),
			AppError::Output(err) => Some(err),
		}
	}
}

impl From<DigestError> for AppError {
	fn from(err: DigestError) -> Self {
		AppError::Digest(err)
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rsh")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Compute SHA-256 digests with a from-scratch engine")
		.arg_required_else_help(true)
		.arg(
			Arg::new("file")
				.value_name("FILE")
				.help("File to hash, or - for standard input")
				.value_parser(clap::value_parser!(PathBuf))
				.required(true),
		)
		.arg(
			Arg::new("format")
				.short('f')
				.long("format")
				.value_parser(clap::value_parser!(OutputFormat))
				.help("Digest encoding (hex, base64)")
				.default_value("hex"),
		)
		.arg(
			Arg::new("hash-only")
				.long("hash-only")
				.help("Emit only the digest without the file name")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("check")
				.short('c')
				.long("check")
				.value_name("DIGEST")
				.help("Compare against an expected 64-character hex digest")
				.value_parser(|s: &str| s.parse::<Digest>()),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Log debug diagnostics to stderr (RUST_LOG overrides)")
				.action(ArgAction::SetTrue),
		)
}

pub fn parse_request<I, T>(args: I) -> Result<DigestRequest, AppError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let matches =
		build_cli().try_get_matches_from(args).map_err(AppError::Cli)?;

	let file = matches
		.get_one::<PathBuf>("file")
		.expect("file is a required argument");
	let input = if file.as_os_str() == "-" {
		InputSource::Stdin
	} else {
		InputSource::Path(file.clone())
	};

	Ok(DigestRequest {
		input,
		format: matches
			.get_one::<OutputFormat>("format")
			.copied()
			.unwrap_or_default(),
		hash_only: matches.get_flag("hash-only"),
		expected: matches.get_one::<Digest>("check").copied(),
		verbose: matches.get_flag("verbose"),
	})
}

/// Hashes the requested input and writes the result line to `out`.
pub fn execute<W: Write>(
	request: &DigestRequest,
	out: &mut W,
) -> Result<Outcome, AppError> {
	let name = request.input.display_name();
	let digest = match &request.input {
		InputSource::Path(path) => digest_file(path)?,
		InputSource::Stdin => {
			let stdin = io::stdin();
			digest_unsized(stdin.lock())
				.map_err(|err| err.with_path("-"))?
		}
	};

	let (line, outcome) = match request.expected {
		Some(expected) => {
			let matched = expected == digest;
			debug!(%expected, actual = %digest, matched, "checked digest");
			let outcome = if matched {
				Outcome::Verified
			} else {
				Outcome::Mismatch
			};
			(format_check(&name, matched), outcome)
		}
		None => (
			format_line(&digest, &name, request.format, request.hash_only),
			Outcome::Printed,
		),
	};
	writeln!(out, "{}", line).map_err(AppError::Output)?;
	Ok(outcome)
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.try_init();
}

pub fn run() -> Result<Outcome, AppError> {
	let request = parse_request(std::env::args_os())?;
	init_tracing(request.verbose);
	debug!(?request, "parsed command line");
	let stdout = io::stdout();
	let mut handle = stdout.lock();
	execute(&request, &mut handle)
}
