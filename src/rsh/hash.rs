// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rsh::error::DigestError;
use crate::rsh::sha256::{Digest, Sha256, Sha256Stream};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

pub fn digest_bytes(data: &[u8]) -> Result<Digest, DigestError> {
	digest_reader(data, data.len() as u64)
}

/// Hashes exactly `total_len` bytes read from `reader`.
pub fn digest_reader<R: Read>(
	reader: R,
	total_len: u64,
) -> Result<Digest, DigestError> {
	Sha256::new().digest_stream(reader, total_len)
}

/// Hashes everything `reader` yields until end of stream.
pub fn digest_unsized<R: Read>(
	mut reader: R,
) -> Result<Digest, DigestError> {
	let mut stream = Sha256Stream::new();
	io::copy(&mut reader, &mut stream)?;
	debug!(bytes = stream.len(), "finished unsized stream");
	stream.finalize()
}

/// Opens, stats and hashes a file. Directories are rejected; FIFOs and
/// devices are read to end of stream. The handle is dropped on every
/// return path.
pub fn digest_file(path: impl AsRef<Path>) -> Result<Digest, DigestError> {
	let path = path.as_ref();
	let file = File::open(path)
		.map_err(|err| DigestError::from(err).with_path(path))?;
	let md = file
		.metadata()
		.map_err(|err| DigestError::from(err).with_path(path))?;
	if md.is_dir() {
		return Err(DigestError::IsADirectory {
			path: path.to_path_buf(),
		});
	}
	if !md.is_file() {
		// FIFOs and devices report no meaningful size.
		debug!(path = %path.display(), "hashing non-regular file as a stream");
		return digest_unsized(BufReader::new(file))
			.map_err(|err| err.with_path(path));
	}
	debug!(path = %path.display(), bytes = md.len(), "hashing file");

	let digest = digest_reader(BufReader::new(file), md.len())
		.map_err(|err| err.with_path(path))?;
	debug!(path = %path.display(), %digest, "file digest ready");
	Ok(digest)
}
