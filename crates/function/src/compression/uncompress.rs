// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType, error::diagnostic::compression::zlib_data_corrupted};
use tracing::trace;

use crate::{ScalarFunction, ScalarFunctionContext, compression::codec, error::ScalarFunctionResult};

/// UNCOMPRESS(compressed_string)
///
/// Corrupted input is a warning and NULL, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Uncompress {
	max_blob_width: u64,
}

impl Uncompress {
	pub fn new(max_blob_width: u64) -> Self {
		Self {
			max_blob_width,
		}
	}
}

impl ScalarFunction for Uncompress {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, _args: &[ExpressionRef]) -> FieldType {
		FieldType::binary_string(self.max_blob_width)
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(payload) = ctx.string(0)? else {
			return Ok(None);
		};

		match codec::uncompress(&payload, self.max_blob_width) {
			Ok(data) => Ok(Some(data)),
			Err(err) => {
				trace!(%err, len = payload.len(), "corrupted payload");
				ctx.warn(zlib_data_corrupted(ctx.fragment.clone()));
				Ok(None)
			}
		}
	}
}
