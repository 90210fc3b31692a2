// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};

use crate::{ScalarFunction, ScalarFunctionContext, error::ScalarFunctionResult, hash::HashAlgorithm};

/// SHA1(str), also reachable as SHA(str)
#[derive(Debug, Clone, PartialEq)]
pub struct Sha1;

impl Sha1 {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for Sha1 {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::string(HashAlgorithm::Sha1.hex_len())
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(data) = ctx.string(0)? else {
			return Ok(None);
		};
		Ok(Some(HashAlgorithm::Sha1.hex_digest(&data)))
	}
}
