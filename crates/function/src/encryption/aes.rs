// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::{BlockEncryptionMode, ExpressionRef};
use cryptofn_type::{EvalType, FieldType};
use tracing::trace;

use crate::{
	ScalarFunction, ScalarFunctionContext,
	encryption::{cipher, key::derive_key},
	error::ScalarFunctionResult,
};

const ARGUMENTS: &[EvalType] = &[EvalType::String, EvalType::String];

/// AES_ENCRYPT(str, key_str)
#[derive(Debug, Clone, PartialEq)]
pub struct AesEncrypt {
	mode: BlockEncryptionMode,
}

impl AesEncrypt {
	pub fn new(mode: BlockEncryptionMode) -> Self {
		Self {
			mode,
		}
	}
}

impl ScalarFunction for AesEncrypt {
	fn arguments(&self) -> &'static [EvalType] {
		ARGUMENTS
	}

	fn return_type(&self, args: &[ExpressionRef]) -> FieldType {
		// at most one block of padding
		let block = self.mode.block_size() as u64;
		let len = args.first().map(|arg| arg.field_type().max_len).unwrap_or(0);
		FieldType::binary_string(block.saturating_mul(len / block + 1))
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(plaintext) = ctx.string(0)? else {
			return Ok(None);
		};
		let Some(key) = ctx.string(1)? else {
			return Ok(None);
		};

		let key = derive_key(&key, self.mode.key_len());
		match cipher::encrypt(self.mode, &plaintext, &key) {
			Ok(ciphertext) => Ok(Some(ciphertext)),
			Err(err) => {
				trace!(mode = %self.mode, %err, "encryption failed");
				Ok(None)
			}
		}
	}
}

/// AES_DECRYPT(crypt_str, key_str)
#[derive(Debug, Clone, PartialEq)]
pub struct AesDecrypt {
	mode: BlockEncryptionMode,
}

impl AesDecrypt {
	pub fn new(mode: BlockEncryptionMode) -> Self {
		Self {
			mode,
		}
	}
}

impl ScalarFunction for AesDecrypt {
	fn arguments(&self) -> &'static [EvalType] {
		ARGUMENTS
	}

	fn return_type(&self, args: &[ExpressionRef]) -> FieldType {
		let len = args.first().map(|arg| arg.field_type().max_len).unwrap_or(0);
		FieldType::binary_string(len)
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(ciphertext) = ctx.string(0)? else {
			return Ok(None);
		};
		let Some(key) = ctx.string(1)? else {
			return Ok(None);
		};

		let key = derive_key(&key, self.mode.key_len());
		match cipher::decrypt(self.mode, &ciphertext, &key) {
			Ok(plaintext) => Ok(Some(plaintext)),
			Err(err) => {
				trace!(mode = %self.mode, %err, "decryption failed");
				Ok(None)
			}
		}
	}
}
