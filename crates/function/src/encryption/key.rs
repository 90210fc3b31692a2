// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// MySQL's key stretching for AES: every byte of `key` is XORed into a
/// zeroed buffer of `len` bytes at position `i % len`.
pub fn derive_key(key: &[u8], len: usize) -> Vec<u8> {
	let mut derived = vec![0u8; len];
	if len == 0 {
		return derived;
	}
	for (i, byte) in key.iter().enumerate() {
		derived[i % len] ^= byte;
	}
	derived
}
