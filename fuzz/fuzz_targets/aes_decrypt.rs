// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![no_main]

use arbitrary::Arbitrary;
use cryptofn_core::BlockEncryptionMode;
use cryptofn_function::encryption::{cipher, key::derive_key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
	key: &'a [u8],
	data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
	let mode = BlockEncryptionMode::Aes128Ecb;
	let key = derive_key(input.key, mode.key_len());

	let _ = cipher::decrypt(mode, input.data, &key);

	let ciphertext = cipher::encrypt(mode, input.data, &key).expect("derived key has the cipher's key length");
	assert_eq!(cipher::decrypt(mode, &ciphertext, &key).ok().as_deref(), Some(input.data));
});
