// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ::sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

pub mod md5;
pub mod sha1;
pub mod sha2;

pub use self::{md5::Md5, sha1::Sha1, sha2::Sha2};

/// Digest algorithms reachable from SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
	Md5,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
}

impl HashAlgorithm {
	/// Maps SHA2's `hash_length` argument. `0` means SHA-256.
	pub fn from_sha2_length(len: i64) -> Option<Self> {
		match len {
			0 | 256 => Some(HashAlgorithm::Sha256),
			224 => Some(HashAlgorithm::Sha224),
			384 => Some(HashAlgorithm::Sha384),
			512 => Some(HashAlgorithm::Sha512),
			_ => None,
		}
	}

	/// Length of the lowercase hex rendering.
	pub fn hex_len(&self) -> u64 {
		match self {
			HashAlgorithm::Md5 => 32,
			HashAlgorithm::Sha1 => 40,
			HashAlgorithm::Sha224 => 56,
			HashAlgorithm::Sha256 => 64,
			HashAlgorithm::Sha384 => 96,
			HashAlgorithm::Sha512 => 128,
		}
	}

	pub fn digest(&self, data: &[u8]) -> Vec<u8> {
		match self {
			HashAlgorithm::Md5 => ::md5::Md5::digest(data).to_vec(),
			HashAlgorithm::Sha1 => ::sha1::Sha1::digest(data).to_vec(),
			HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
			HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
			HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
			HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
		}
	}

	pub fn hex_digest(&self, data: &[u8]) -> Vec<u8> {
		hex::encode(self.digest(data)).into_bytes()
	}
}
