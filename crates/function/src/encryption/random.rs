// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::RangeInclusive;

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};

use crate::{
	ScalarFunction, ScalarFunctionContext,
	error::{ScalarFunctionError, ScalarFunctionResult},
};

pub const MAX_RANDOM_BYTES: usize = 1024;

const LENGTH: RangeInclusive<i64> = 1..=MAX_RANDOM_BYTES as i64;

/// RANDOM_BYTES(len)
#[derive(Debug, Clone, PartialEq)]
pub struct RandomBytes;

impl RandomBytes {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for RandomBytes {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::Int]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::binary_string(MAX_RANDOM_BYTES as u64)
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(len) = ctx.int(0)? else {
			return Ok(None);
		};
		if !LENGTH.contains(&len) {
			return Err(ScalarFunctionError::OutOfRange {
				function: ctx.fragment.clone(),
				what: "length",
				context: "random_bytes",
			});
		}

		let mut buf = vec![0u8; len as usize];
		getrandom::fill(&mut buf).map_err(|err| ctx.internal(format!("fail to generate random bytes: {}", err)))?;
		Ok(Some(buf))
	}
}
