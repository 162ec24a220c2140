// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: framer.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Splits a byte source of known length into padded 64-byte blocks.

use super::constants::{Block, BLOCK_SIZE, LENGTH_FIELD_OFFSET, PAD_BYTE};
use crate::rsh::error::DigestError;
use std::io::{self, Read};

/// Number of blocks needed for `total_len` message bytes plus padding.
///
/// A final data block holding 56 bytes or more leaves no room for the pad
/// byte and the length field, so it spills into one extra block.
pub fn block_count(total_len: u64) -> u64 {
	let block = BLOCK_SIZE as u64;
	let tail = total_len % block;
	let extra = if tail >= LENGTH_FIELD_OFFSET as u64 { 2 } else { 1 };
	total_len / block + extra
}

/// Yields the padded blocks of a message read sequentially from `R`.
///
/// The declared length must match the source exactly: a source that ends
/// early fails with [`io::ErrorKind::UnexpectedEof`], one that keeps
/// producing data fails with [`io::ErrorKind::InvalidData`].
pub struct BlockFramer<R> {
	reader: R,
	total_len: u64,
	consumed: u64,
	emitted: u64,
	block_count: u64,
	padded: bool,
	finished: bool,
}

impl<R: Read> BlockFramer<R> {
	pub fn new(reader: R, total_len: u64) -> Self {
		Self::resume(reader, 0, total_len)
	}

	/// Continues framing a message whose first `absorbed` bytes were
	/// already turned into blocks. `absorbed` must be block aligned.
	pub(crate) fn resume(reader: R, absorbed: u64, total_len: u64) -> Self {
		debug_assert_eq!(absorbed % BLOCK_SIZE as u64, 0);
		debug_assert!(absorbed <= total_len);
		Self {
			reader,
			total_len,
			consumed: absorbed,
			emitted: 0,
			block_count: block_count(total_len)
				- absorbed / BLOCK_SIZE as u64,
			padded: false,
			finished: false,
		}
	}

	pub fn total_len(&self) -> u64 {
		self.total_len
	}

	/// Blocks this framer will emit in total.
	pub fn block_count(&self) -> u64 {
		self.block_count
	}

	pub fn bit_length(&self) -> u64 {
		self.total_len.wrapping_mul(8)
	}

	pub fn next_block(&mut self) -> Result<Option<Block>, DigestError> {
		if self.finished {
			return Ok(None);
		}
		let result = self.frame_next();
		if !matches!(result, Ok(Some(_))) {
			self.finished = true;
		}
		result
	}

	fn frame_next(&mut self) -> Result<Option<Block>, DigestError> {
		if self.emitted == self.block_count {
			self.ensure_exhausted()?;
			return Ok(None);
		}

		let mut block = [0u8; BLOCK_SIZE];
		let filled = self.fill(&mut block)?;
		self.consumed += filled as u64;

		if !self.padded
			&& self.consumed == self.total_len
			&& filled < BLOCK_SIZE
		{
			block[filled] = PAD_BYTE;
			self.padded = true;
		}

		self.emitted += 1;
		if self.emitted == self.block_count {
			debug_assert!(self.padded);
			debug_assert!(filled < LENGTH_FIELD_OFFSET);
			block[LENGTH_FIELD_OFFSET..]
				.copy_from_slice(&self.bit_length().to_be_bytes());
		}
		Ok(Some(block))
	}

	// Reads until the block is full or the declared length is reached.
	fn fill(&mut self, block: &mut Block) -> Result<usize, DigestError> {
		let remaining = self.total_len - self.consumed;
		let want = remaining.min(BLOCK_SIZE as u64) as usize;
		let mut filled = 0;
		while filled < want {
			match self.reader.read(&mut block[filled..want]) {
				Ok(0) => {
					return Err(DigestError::io(io::Error::new(
						io::ErrorKind::UnexpectedEof,
						format!(
							"stream ended after {} of {} bytes",
							self.consumed + filled as u64,
							self.total_len
						),
					)))
				}
				Ok(n) => filled += n,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
				Err(err) => return Err(DigestError::io(err)),
			}
		}
		Ok(filled)
	}

	fn ensure_exhausted(&mut self) -> Result<(), DigestError> {
		let mut extra = [0u8; 1];
		loop {
			match self.reader.read(&mut extra) {
				Ok(0) => return Ok(()),
				Ok(_) => {
					return Err(DigestError::io(io::Error::new(
						io::ErrorKind::InvalidData,
						format!(
							"stream is longer than the declared {} bytes",
							self.total_len
						),
					)))
				}
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
				Err(err) => return Err(DigestError::io(err)),
			}
		}
	}
}

impl<R: Read> Iterator for BlockFramer<R> {
	type Item = Result<Block, DigestError>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_block().transpose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Hands out at most `step` bytes per read.
	struct Trickle<'a> {
		data: &'a [u8],
		step: usize,
	}

	impl Read for Trickle<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			let n = self.step.min(buf.len()).min(self.data.len());
			buf[..n].copy_from_slice(&self.data[..n]);
			self.data = &self.data[n..];
			Ok(n)
		}
	}

	/// Fails with `Interrupted` on every other call.
	struct Flaky<'a> {
		data: &'a [u8],
		interrupt: bool,
	}

	impl Read for Flaky<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			self.interrupt = !self.interrupt;
			if self.interrupt {
				return Err(io::Error::from(io::ErrorKind::Interrupted));
			}
			self.data.read(buf)
		}
	}

	fn frame(data: &[u8]) -> Vec<Block> {
		BlockFramer::new(data, data.len() as u64)
			.collect::<Result<Vec<_>, _>>()
			.expect("in-memory framing cannot fail")
	}

	fn length_field(block: &Block) -> u64 {
		let mut field = [0u8; 8];
		field.copy_from_slice(&block[LENGTH_FIELD_OFFSET..]);
		u64::from_be_bytes(field)
	}

	#[test]
	fn block_count_follows_the_56_byte_boundary() {
		for (len, blocks) in [
			(0, 1),
			(3, 1),
			(54, 1),
			(55, 1),
			(56, 2),
			(63, 2),
			(64, 2),
			(119, 2),
			(120, 3),
			(128, 3),
		] {
			assert_eq!(block_count(len), blocks, "length {len}");
		}
	}

	#[test]
	fn empty_message_is_one_pad_block() {
		let blocks = frame(b"");
		assert_eq!(blocks.len(), 1);
		let mut expected = [0u8; BLOCK_SIZE];
		expected[0] = PAD_BYTE;
		assert_eq!(blocks[0], expected);
	}

	#[test]
	fn short_message_gets_pad_byte_and_bit_length() {
		let blocks = frame(b"abc");
		assert_eq!(blocks.len(), 1);
		assert_eq!(&blocks[0][..4], &[b'a', b'b', b'c', PAD_BYTE]);
		assert!(blocks[0][4..LENGTH_FIELD_OFFSET].iter().all(|b| *b == 0));
		assert_eq!(length_field(&blocks[0]), 24);
	}

	#[test]
	fn fifty_five_bytes_still_fit_one_block() {
		let blocks = frame(&[0x61; 55]);
		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0][55], PAD_BYTE);
		assert_eq!(length_field(&blocks[0]), 440);
	}

	#[test]
	fn fifty_six_bytes_spill_into_padding_only_block() {
		let blocks = frame(&[0x61; 56]);
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0][56], PAD_BYTE);
		assert!(blocks[0][57..].iter().all(|b| *b == 0));
		assert!(blocks[1][..LENGTH_FIELD_OFFSET].iter().all(|b| *b == 0));
		assert_eq!(length_field(&blocks[1]), 448);
	}

	#[test]
	fn full_block_message_puts_pad_at_start_of_next_block() {
		let blocks = frame(&[0x61; 64]);
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0], [0x61; BLOCK_SIZE]);
		assert_eq!(blocks[1][0], PAD_BYTE);
		assert_eq!(length_field(&blocks[1]), 512);
	}

	#[test]
	fn short_reads_produce_identical_blocks() {
		let data: Vec<u8> = (0..=200u8).collect();
		let expected = frame(&data);
		for step in [1, 3, 7, 63, 64, 65] {
			let reader = Trickle { data: &data, step };
			let blocks = BlockFramer::new(reader, data.len() as u64)
				.collect::<Result<Vec<_>, _>>()
				.expect("framing");
			assert_eq!(blocks, expected, "step {step}");
		}
	}

	#[test]
	fn interrupted_reads_are_retried() {
		let data = [0x5a; 70];
		let reader = Flaky {
			data: &data,
			interrupt: false,
		};
		let blocks = BlockFramer::new(reader, 70)
			.collect::<Result<Vec<_>, _>>()
			.expect("framing");
		assert_eq!(blocks, frame(&data));
	}

	#[test]
	fn truncated_source_is_an_unexpected_eof() {
		let mut framer = BlockFramer::new(&b"hello"[..], 10);
		let err = framer.next_block().expect_err("must fail");
		match err {
			DigestError::Io { source, .. } => {
				assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof)
			}
			other => panic!("unexpected error {other:?}"),
		}
		assert!(framer.next().is_none());
	}

	#[test]
	fn overlong_source_is_invalid_data() {
		let results: Vec<_> = BlockFramer::new(&b"abcd"[..], 3).collect();
		assert_eq!(results.len(), 2);
		assert!(results[0].is_ok());
		match &results[1] {
			Err(DigestError::Io { source, .. }) => {
				assert_eq!(source.kind(), io::ErrorKind::InvalidData)
			}
			other => panic!("unexpected result {other:?}"),
		}
	}

	#[test]
	fn resume_writes_length_of_the_whole_message() {
		let blocks = BlockFramer::resume(&b"xyz"[..], 64, 67)
			.collect::<Result<Vec<_>, _>>()
			.expect("framing");
		assert_eq!(blocks.len(), 1);
		assert_eq!(&blocks[0][..4], b"xyz\x80");
		assert_eq!(length_field(&blocks[0]), 67 * 8);
	}
}
