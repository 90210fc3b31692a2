// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use cryptofn_type::{Error, MAX_BLOB_WIDTH, error::diagnostic::config::unsupported_block_encryption_mode};
use serde::{Deserialize, Serialize};

/// Cipher used by AES_ENCRYPT and AES_DECRYPT, as MySQL's
/// `block_encryption_mode` variable names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockEncryptionMode {
	#[default]
	Aes128Ecb,
}

impl BlockEncryptionMode {
	pub fn key_len(&self) -> usize {
		match self {
			BlockEncryptionMode::Aes128Ecb => 16,
		}
	}

	pub fn block_size(&self) -> usize {
		match self {
			BlockEncryptionMode::Aes128Ecb => 16,
		}
	}
}

impl Display for BlockEncryptionMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BlockEncryptionMode::Aes128Ecb => f.write_str("aes-128-ecb"),
		}
	}
}

impl FromStr for BlockEncryptionMode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"aes-128-ecb" => Ok(BlockEncryptionMode::Aes128Ecb),
			_ => Err(unsupported_block_encryption_mode(s).into()),
		}
	}
}

impl TryFrom<String> for BlockEncryptionMode {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<BlockEncryptionMode> for String {
	fn from(value: BlockEncryptionMode) -> Self {
		value.to_string()
	}
}

/// Settings consulted when builtins are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FunctionConfig {
	/// Upper bound for blob results such as COMPRESS and UNCOMPRESS.
	///
	/// Default: 4294967295 (LONGBLOB)
	pub max_blob_width: u64,

	/// Default: aes-128-ecb
	pub block_encryption_mode: BlockEncryptionMode,
}

impl Default for FunctionConfig {
	fn default() -> Self {
		Self {
			max_blob_width: MAX_BLOB_WIDTH,
			block_encryption_mode: BlockEncryptionMode::default(),
		}
	}
}

impl FunctionConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_blob_width(mut self, width: u64) -> Self {
		self.max_blob_width = width;
		self
	}

	pub fn block_encryption_mode(mut self, mode: BlockEncryptionMode) -> Self {
		self.block_encryption_mode = mode;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = FunctionConfig::default();
		assert_eq!(config.max_blob_width, MAX_BLOB_WIDTH);
		assert_eq!(config.block_encryption_mode, BlockEncryptionMode::Aes128Ecb);
	}

	#[test]
	fn test_setters() {
		let config = FunctionConfig::new().max_blob_width(65_535);
		assert_eq!(config.max_blob_width, 65_535);
	}

	#[test]
	fn test_parse_mode_case_insensitive() {
		assert_eq!("AES-128-ECB".parse::<BlockEncryptionMode>().unwrap(), BlockEncryptionMode::Aes128Ecb);
	}

	#[test]
	fn test_parse_unsupported_mode() {
		let err = "aes-256-cbc".parse::<BlockEncryptionMode>().unwrap_err();
		assert_eq!(err.code(), "CONFIG_001");
	}

	#[test]
	fn test_deserialize_partial() {
		let config: FunctionConfig = serde_json::from_str(r#"{"max-blob-width": 1024}"#).unwrap();
		assert_eq!(config.max_blob_width, 1024);
		assert_eq!(config.block_encryption_mode, BlockEncryptionMode::Aes128Ecb);
	}

	#[test]
	fn test_deserialize_unsupported_mode() {
		let result: Result<FunctionConfig, _> = serde_json::from_str(r#"{"block-encryption-mode": "aes-128-cbc"}"#);
		assert!(result.is_err());
	}

	#[test]
	fn test_serialize_mode_name() {
		let json = serde_json::to_string(&FunctionConfig::default()).unwrap();
		assert!(json.contains(r#""block-encryption-mode":"aes-128-ecb""#));
	}
}
