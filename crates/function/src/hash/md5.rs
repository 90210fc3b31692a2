// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};

use crate::{ScalarFunction, ScalarFunctionContext, error::ScalarFunctionResult, hash::HashAlgorithm};

/// MD5(str)
#[derive(Debug, Clone, PartialEq)]
pub struct Md5;

impl Md5 {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for Md5 {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::string(HashAlgorithm::Md5.hex_len())
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(data) = ctx.string(0)? else {
			return Ok(None);
		};
		Ok(Some(HashAlgorithm::Md5.hex_digest(&data)))
	}
}
