// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod rsh {
	pub mod app;
	pub mod error;
	pub mod hash;
	pub mod output;
	pub mod sha256;
}

pub use rsh::error::DigestError;
pub use rsh::hash::{digest_bytes, digest_file, digest_reader, digest_unsized};
pub use rsh::sha256::{Digest, Sha256, Sha256Stream};
