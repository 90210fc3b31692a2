// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType, error::diagnostic::compression::zlib_data_corrupted, value::r#type::INT_DISPLAY_WIDTH};

use crate::{ScalarFunction, ScalarFunctionContext, compression::codec, error::ScalarFunctionResult};

/// UNCOMPRESSED_LENGTH(compressed_string)
///
/// Reads the length prefix without inflating. A corrupted payload is a
/// warning and `0`, unlike UNCOMPRESS which yields NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct UncompressedLength;

impl UncompressedLength {
	pub fn new() -> Self {
		Self
	}
}

impl ScalarFunction for UncompressedLength {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::int(INT_DISPLAY_WIDTH)
	}

	fn eval_int(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<i64>> {
		let Some(payload) = ctx.string(0)? else {
			return Ok(None);
		};

		match codec::uncompressed_length(&payload) {
			Ok(len) => Ok(Some(i64::from(len))),
			Err(_) => {
				ctx.warn(zlib_data_corrupted(ctx.fragment.clone()));
				Ok(Some(0))
			}
		}
	}
}
