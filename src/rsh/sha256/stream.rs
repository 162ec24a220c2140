// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: stream.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Incremental hashing for sources whose length is unknown up front.

use super::constants::{Block, BLOCK_SIZE};
use super::framer::BlockFramer;
use super::state::Digest;
use super::Sha256;
use crate::rsh::error::DigestError;
use std::io;

/// Buffers at most one partial block; full blocks go straight into the
/// engine. Padding is left to [`BlockFramer`] at [`finalize`].
///
/// [`finalize`]: Sha256Stream::finalize
#[derive(Clone, Debug)]
pub struct Sha256Stream {
	engine: Sha256,
	buffer: Block,
	buffered: usize,
	absorbed: u64,
}

impl Sha256Stream {
	pub fn new() -> Self {
		Self {
			engine: Sha256::new(),
			buffer: [0u8; BLOCK_SIZE],
			buffered: 0,
			absorbed: 0,
		}
	}

	/// Total message bytes seen so far.
	pub fn len(&self) -> u64 {
		self.absorbed + self.buffered as u64
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn update(&mut self, mut data: &[u8]) {
		if self.buffered > 0 {
			let take = (BLOCK_SIZE - self.buffered).min(data.len());
			self.buffer[self.buffered..self.buffered + take]
				.copy_from_slice(&data[..take]);
			self.buffered += take;
			data = &data[take..];
			if self.buffered < BLOCK_SIZE {
				return;
			}
			let block = self.buffer;
			self.absorb(&block);
			self.buffered = 0;
		}

		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			let mut block = [0u8; BLOCK_SIZE];
			block.copy_from_slice(chunk);
			self.absorb(&block);
		}
		let rest = chunks.remainder();
		self.buffer[..rest.len()].copy_from_slice(rest);
		self.buffered = rest.len();
	}

	pub fn finalize(mut self) -> Result<Digest, DigestError> {
		let tail = &self.buffer[..self.buffered];
		let total = self.absorbed + self.buffered as u64;
		self.engine
			.absorb_framed(BlockFramer::resume(tail, self.absorbed, total))?;
		self.engine.finalize()
	}

	fn absorb(&mut self, block: &Block) {
		self.engine.process_block(block);
		self.absorbed += BLOCK_SIZE as u64;
	}
}

impl Default for Sha256Stream {
	fn default() -> Self {
		Self::new()
	}
}

impl io::Write for Sha256Stream {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
