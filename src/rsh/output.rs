// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// Module: output
// Purpose: Digest line rendering for the CLI.

use crate::rsh::sha256::Digest;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use std::fmt;

/// Encodings accepted by the `--format` flag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
	#[default]
	Hex,
	Base64,
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Hex => "hex",
			Self::Base64 => "base64",
		};
		write!(f, "{}", label)
	}
}

pub fn encode_digest(digest: &Digest, format: OutputFormat) -> String {
	match format {
		OutputFormat::Hex => digest.to_hex(),
		OutputFormat::Base64 => STANDARD.encode(digest.as_bytes()),
	}
}

/// `<encoded>  <name>`, the layout `sha256sum` uses, or just the digest.
pub fn format_line(
	digest: &Digest,
	name: &str,
	format: OutputFormat,
	hash_only: bool,
) -> String {
	let encoded = encode_digest(digest, format);
	if hash_only {
		encoded
	} else {
		format!("{}  {}", encoded, name)
	}
}

pub fn format_check(name: &str, matched: bool) -> String {
	format!("{}: {}", name, if matched { "OK" } else { "FAILED" })
}
