// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: constants.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Fixed tables and sizes defined by FIPS 180-4 for SHA-256.

/// Size of one message block in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Size of a finished digest in bytes (256 bits).
pub const DIGEST_SIZE: usize = 32;

/// Number of words in the per-block message schedule.
pub const SCHEDULE_LEN: usize = 64;

/// Number of words in the running hash state.
pub const STATE_WORDS: usize = 8;

/// Offset of the 64-bit big-endian length field inside the final block.
pub const LENGTH_FIELD_OFFSET: usize = BLOCK_SIZE - 8;

/// The `1` bit followed by seven `0` bits that terminates every message.
pub const PAD_BYTE: u8 = 0x80;

/// First 32 bits of the fractional parts of the square roots of the
/// first 8 primes.
pub const IV: [u32; STATE_WORDS] = [
	0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f,
	0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// First 32 bits of the fractional parts of the cube roots of the
/// first 64 primes.
pub const K: [u32; SCHEDULE_LEN] = [
	0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b,
	0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98, 0x12835b01,
	0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7,
	0xc19bf174, 0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
	0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152,
	0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147,
	0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc,
	0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
	0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
	0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08,
	0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f,
	0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
	0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// One 512-bit unit of (possibly padded) message.
pub type Block = [u8; BLOCK_SIZE];
