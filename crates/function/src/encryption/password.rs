// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType, error::diagnostic::deprecated::deprecated_no_replacement};
use sha1::{Digest, Sha1};

use crate::{ScalarFunction, ScalarFunctionContext, error::ScalarFunctionResult};

/// Hex digits in a `mysql_native_password` hash, without the `*` marker.
pub const PWD_HASH_LEN: u64 = 40;

/// `*` followed by the uppercase hex of SHA1(SHA1(password)).
pub fn encode_password(password: &[u8]) -> String {
	let stage1 = Sha1::digest(password);
	let stage2 = Sha1::digest(stage1);
	format!("*{}", hex::encode_upper(stage2))
}

/// PASSWORD(str)
#[derive(Debug, Clone, PartialEq)]
pub struct Password;

impl Password {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for Password {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::string(PWD_HASH_LEN + 1)
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(password) = ctx.string(0)? else {
			return Ok(None);
		};
		if password.is_empty() {
			return Ok(Some(Vec::new()));
		}

		ctx.warn(deprecated_no_replacement(ctx.fragment.clone(), "PASSWORD"));
		Ok(Some(encode_password(&password).into_bytes()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_hash() {
		assert_eq!(encode_password(b"abc"), "*0D3CED9BEC10A777AEC23CCC353A8C08A633045E");
	}

	#[test]
	fn test_length() {
		assert_eq!(encode_password(b"any password").len() as u64, PWD_HASH_LEN + 1);
	}
}
