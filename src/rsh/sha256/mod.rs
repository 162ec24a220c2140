// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: mod.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! From-scratch SHA-256 (FIPS 180-4).
//!
//! [`Sha256`] owns the running state and walks the
//! `Idle -> Absorbing -> Finalized` lifecycle. [`BlockFramer`] turns a
//! byte source of known length into padded blocks, and [`Sha256Stream`]
//! covers sources whose length is only known at the end.

pub mod compress;
pub mod constants;
pub mod framer;
pub mod schedule;
pub mod state;
pub mod stream;

pub use constants::{Block, BLOCK_SIZE, DIGEST_SIZE};
pub use framer::BlockFramer;
pub use schedule::MessageSchedule;
pub use state::{Digest, HashState, ParseDigestError};
pub use stream::Sha256Stream;

use crate::rsh::error::DigestError;
use std::io::Read;
use strum::Display;
use tracing::trace;

/// Lifecycle position of a [`Sha256`] engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EnginePhase {
	Idle,
	Absorbing,
	Finalized,
}

/// The digest engine: one message at a time, reusable after [`reset`].
///
/// [`reset`]: Sha256::reset
#[derive(Clone, Debug)]
pub struct Sha256 {
	state: HashState,
	blocks: u64,
	phase: EnginePhase,
}

impl Sha256 {
	pub fn new() -> Self {
		Self {
			state: HashState::initial(),
			blocks: 0,
			phase: EnginePhase::Idle,
		}
	}

	/// Restores the initial hash values and returns to `Idle`.
	pub fn reset(&mut self) {
		self.state = HashState::initial();
		self.blocks = 0;
		self.phase = EnginePhase::Idle;
	}

	pub fn phase(&self) -> EnginePhase {
		self.phase
	}

	pub fn state(&self) -> &HashState {
		&self.state
	}

	/// Blocks absorbed since the last reset.
	pub fn blocks_absorbed(&self) -> u64 {
		self.blocks
	}

	/// Folds one already padded block into the state.
	pub fn absorb_block(&mut self, block: &Block) -> Result<(), DigestError> {
		if self.phase == EnginePhase::Finalized {
			return Err(self.invalid("absorb a block"));
		}
		self.process_block(block);
		Ok(())
	}

	/// Serializes the state. Only valid after at least one block.
	pub fn finalize(&mut self) -> Result<Digest, DigestError> {
		if self.phase != EnginePhase::Absorbing {
			return Err(self.invalid("finalize"));
		}
		self.phase = EnginePhase::Finalized;
		Ok(self.state.to_digest())
	}

	/// Frames, absorbs and finalizes a message of `total_len` bytes.
	///
	/// On a read error the engine keeps whatever it absorbed and must be
	/// reset before the next message; no partial digest is returned.
	pub fn digest_stream<R: Read>(
		&mut self,
		reader: R,
		total_len: u64,
	) -> Result<Digest, DigestError> {
		if self.phase != EnginePhase::Idle {
			return Err(self.invalid("start a new message"));
		}
		self.absorb_framed(BlockFramer::new(reader, total_len))?;
		self.finalize()
	}

	pub(crate) fn absorb_framed<R: Read>(
		&mut self,
		framer: BlockFramer<R>,
	) -> Result<(), DigestError> {
		for block in framer {
			self.absorb_block(&block?)?;
		}
		Ok(())
	}

	// Callers guarantee the engine is not finalized.
	pub(crate) fn process_block(&mut self, block: &Block) {
		let schedule = MessageSchedule::from_block(block);
		compress::compress(&mut self.state, &schedule);
		self.blocks += 1;
		self.phase = EnginePhase::Absorbing;
		trace!(block = self.blocks, "absorbed block");
	}

	fn invalid(&self, operation: &'static str) -> DigestError {
		DigestError::InvalidState {
			phase: self.phase,
			operation,
		}
	}
}

impl Default for Sha256 {
	fn default() -> Self {
		Self::new()
	}
}
