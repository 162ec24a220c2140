// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: compress.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use super::constants::K;
use super::schedule::MessageSchedule;
use super::state::HashState;

fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn choose(e: u32, f: u32, g: u32) -> u32 {
	(e & f) ^ (!e & g)
}

fn majority(a: u32, b: u32, c: u32) -> u32 {
	(a & b) ^ (a & c) ^ (b & c)
}

/// Runs the 64 rounds over `schedule` and folds the working variables
/// back into `state`.
pub fn compress(state: &mut HashState, schedule: &MessageSchedule) {
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] =
		*state.words();

	for (k, w) in K.iter().zip(schedule.words().iter()) {
		let temp1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(choose(e, f, g))
			.wrapping_add(*k)
			.wrapping_add(*w);
		let temp2 = big_sigma0(a).wrapping_add(majority(a, b, c));

		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(temp1);
		d = c;
		c = b;
		b = a;
		a = temp1.wrapping_add(temp2);
	}

	for (word, working) in state
		.words_mut()
		.iter_mut()
		.zip([a, b, c, d, e, f, g, h])
	{
		*word = word.wrapping_add(working);
	}
}
