// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: state.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Running accumulator and the finished digest value.

use super::constants::{DIGEST_SIZE, IV, STATE_WORDS};
use std::fmt;
use std::str::FromStr;

/// The eight-word accumulator folded forward by every block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState {
	words: [u32; STATE_WORDS],
}

impl HashState {
	pub const fn initial() -> Self {
		Self { words: IV }
	}

	pub fn words(&self) -> &[u32; STATE_WORDS] {
		&self.words
	}

	pub(crate) fn words_mut(&mut self) -> &mut [u32; STATE_WORDS] {
		&mut self.words
	}

	/// Serializes the words big-endian, in order.
	pub fn to_digest(&self) -> Digest {
		let mut bytes = [0u8; DIGEST_SIZE];
		for (chunk, word) in
			bytes.chunks_exact_mut(4).zip(self.words.iter())
		{
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		Digest(bytes)
	}
}

impl Default for HashState {
	fn default() -> Self {
		Self::initial()
	}
}

/// A finished 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
	pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
		&self.0
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			write!(f, "{:02x}", byte)?;
		}
		Ok(())
	}
}

impl fmt::Debug for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Digest({})", self)
	}
}

/// Returned when text cannot be read back as a digest.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseDigestError {
	InvalidLength(usize),
	InvalidHex(hex::FromHexError),
}

impl fmt::Display for ParseDigestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseDigestError::InvalidLength(len) => write!(
				f,
				"expected {} hex characters, found {}",
				DIGEST_SIZE * 2,
				len
			),
			ParseDigestError::InvalidHex(err) => {
				write!(f, "invalid hex digest: {}", err)
			}
		}
	}
}

impl std::error::Error for ParseDigestError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ParseDigestError::InvalidHex(err) => Some(err),
			ParseDigestError::InvalidLength(_) => None,
		}
	}
}

impl FromStr for Digest {
	type Err = ParseDigestError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.len() != DIGEST_SIZE * 2 {
			return Err(ParseDigestError::InvalidLength(s.len()));
		}
		let mut bytes = [0u8; DIGEST_SIZE];
		hex::decode_to_slice(s, &mut bytes)
			.map_err(ParseDigestError::InvalidHex)?;
		Ok(Digest(bytes))
	}
}
