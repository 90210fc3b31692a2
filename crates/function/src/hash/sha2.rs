// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};
use tracing::trace;

use crate::{ScalarFunction, ScalarFunctionContext, error::ScalarFunctionResult, hash::HashAlgorithm};

/// SHA2(str, hash_length)
#[derive(Debug, Clone, PartialEq)]
pub struct Sha2;

impl Sha2 {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for Sha2 {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String, EvalType::Int]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		// widest member of the family
		FieldType::string(HashAlgorithm::Sha512.hex_len())
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(data) = ctx.string(0)? else {
			return Ok(None);
		};
		let Some(hash_length) = ctx.int(1)? else {
			return Ok(None);
		};

		match HashAlgorithm::from_sha2_length(hash_length) {
			Some(algorithm) => Ok(Some(algorithm.hex_digest(&data))),
			None => {
				trace!(hash_length, "unsupported hash length");
				Ok(None)
			}
		}
	}
}
