// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256

use hex_literal::hex;
use rustsha256::rsh::sha256::{BlockFramer, EnginePhase};
use rustsha256::{
	digest_bytes, digest_file, digest_reader, digest_unsized, Sha256,
	Sha256Stream,
};
use sha2::Digest as _;
use std::io::{self, Read, Write};

const PHRASE: &str =
	"Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

/// Returns one byte per call, however large the buffer.
struct OneByte<'a>(&'a [u8]);

impl Read for OneByte<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let data = self.0;
		match (data.split_first(), buf.first_mut()) {
			(Some((byte, rest)), Some(slot)) => {
				*slot = *byte;
				self.0 = rest;
				Ok(1)
			}
			_ => Ok(0),
		}
	}
}

struct Broken {
	served: usize,
}

impl Read for Broken {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.served >= 100 {
			return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
		}
		let n = buf.len().min(100 - self.served);
		buf[..n].fill(0x11);
		self.served += n;
		Ok(n)
	}
}

fn oracle(data: &[u8]) -> [u8; 32] {
	let mut out = [0u8; 32];
	out.copy_from_slice(&sha2::Sha256::digest(data));
	out
}

#[test]
fn lib_sha256_phrase_matches_oracle() {
	let digest = digest_bytes(PHRASE.as_bytes()).expect("digest");
	assert_eq!(digest.as_bytes(), &oracle(PHRASE.as_bytes()));
}

#[test]
fn every_length_up_to_three_blocks_matches_oracle() {
	let data: Vec<u8> = (0..200u32).map(|i| (i * 31 + 7) as u8).collect();
	for len in 0..=data.len() {
		let digest = digest_bytes(&data[..len]).expect("digest");
		assert_eq!(digest.as_bytes(), &oracle(&data[..len]), "length {len}");
	}
}

#[test]
fn million_a_matches_published_vector() {
	let data = vec![b'a'; 1_000_000];
	let digest = digest_bytes(&data).expect("digest");
	assert_eq!(
		digest.as_bytes(),
		&hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
	);
}

#[test]
fn one_byte_reads_match_single_read() {
	let data: Vec<u8> = (0..777u32).map(|i| (i ^ (i >> 3)) as u8).collect();
	let whole = digest_reader(&data[..], data.len() as u64).expect("whole");
	let trickled =
		digest_reader(OneByte(&data), data.len() as u64).expect("trickled");
	assert_eq!(whole, trickled);
}

#[test]
fn file_and_memory_sources_agree() {
	let data = PHRASE.repeat(40);
	let mut file = tempfile::NamedTempFile::new().expect("tempfile");
	file.write_all(data.as_bytes()).expect("write");
	file.flush().expect("flush");

	let from_file = digest_file(file.path()).expect("file");
	let from_memory = digest_bytes(data.as_bytes()).expect("memory");
	let from_stream = digest_unsized(data.as_bytes()).expect("stream");
	assert_eq!(from_file, from_memory);
	assert_eq!(from_file, from_stream);
}

#[test]
fn empty_file_hashes_to_empty_digest() {
	let file = tempfile::NamedTempFile::new().expect("tempfile");
	let digest = digest_file(file.path()).expect("file");
	assert_eq!(
		digest.to_string(),
		"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
	);
}

#[test]
fn mid_stream_read_error_returns_no_digest() {
	let mut engine = Sha256::new();
	let err = engine
		.digest_stream(Broken { served: 0 }, 500)
		.expect_err("read error must surface");
	assert!(err.is_io());
	assert!(err.to_string().contains("disk on fire"));
	assert_ne!(engine.phase(), EnginePhase::Finalized);
}

#[test]
fn engine_reuse_with_reset_matches_fresh_instances() {
	let inputs: [&[u8]; 3] = [b"", b"abc", PHRASE.as_bytes()];
	let mut engine = Sha256::new();
	for input in inputs {
		engine.reset();
		let reused = engine
			.digest_stream(input, input.len() as u64)
			.expect("reused");
		let fresh = Sha256::new()
			.digest_stream(input, input.len() as u64)
			.expect("fresh");
		assert_eq!(reused, fresh);
	}
}

#[test]
fn manual_block_feeding_matches_digest_stream() {
	let data = vec![0x33u8; 130];
	let mut engine = Sha256::new();
	for block in BlockFramer::new(&data[..], data.len() as u64) {
		engine.absorb_block(&block.expect("block")).expect("absorb");
	}
	assert_eq!(engine.blocks_absorbed(), 3);
	let manual = engine.finalize().expect("finalize");
	assert_eq!(manual, digest_bytes(&data).expect("digest"));
}

#[test]
fn stream_updates_match_oracle_across_block_edges() {
	let data = PHRASE.repeat(5);
	let mut stream = Sha256Stream::new();
	for piece in data.as_bytes().chunks(17) {
		stream.update(piece);
	}
	let digest = stream.finalize().expect("finalize");
	assert_eq!(digest.as_bytes(), &oracle(data.as_bytes()));
}
