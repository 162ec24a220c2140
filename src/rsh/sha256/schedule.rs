// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: schedule.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use super::constants::{Block, SCHEDULE_LEN};

fn small_sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The 64-word schedule derived from a single block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageSchedule {
	words: [u32; SCHEDULE_LEN],
}

impl MessageSchedule {
	/// Reads the block as 16 big-endian words and expands them to 64.
	pub fn from_block(block: &Block) -> Self {
		let mut w = [0u32; SCHEDULE_LEN];
		for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
			*word =
				u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
		}
		for i in 16..SCHEDULE_LEN {
			w[i] = w[i - 16]
				.wrapping_add(small_sigma0(w[i - 15]))
				.wrapping_add(w[i - 7])
				.wrapping_add(small_sigma1(w[i - 2]));
		}
		Self { words: w }
	}

	pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
		&self.words
	}
}
