// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![no_main]

use cryptofn_function::compression::codec;
use libfuzzer_sys::fuzz_target;

const LIMIT: u64 = 1 << 24;

fuzz_target!(|data: &[u8]| {
	let _ = codec::uncompress(data, LIMIT);
	let _ = codec::uncompressed_length(data);

	if let Ok(payload) = codec::compress(data) {
		let restored = codec::uncompress(&payload, u64::MAX).expect("payload produced by compress must inflate");
		assert_eq!(restored, data);
	}
});
