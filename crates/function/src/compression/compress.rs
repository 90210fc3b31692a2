// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};
use tracing::trace;

use crate::{ScalarFunction, ScalarFunctionContext, compression::codec, error::ScalarFunctionResult};

/// COMPRESS(str)
#[derive(Debug, Clone, PartialEq)]
pub struct Compress {
	max_blob_width: u64,
}

impl Compress {
	pub fn new(max_blob_width: u64) -> Self {
		Self {
			max_blob_width,
		}
	}
}

/// Worst case size of a payload for `src` input bytes.
fn compress_bound(src: u64) -> u64 {
	src.saturating_add(src >> 12).saturating_add(src >> 14).saturating_add(src >> 25).saturating_add(13)
}

impl ScalarFunction for Compress {
	fn arguments(&self) -> &'static [EvalType] {
		&[EvalType::String]
	}

	fn return_type(&self, args: &[ExpressionRef]) -> FieldType {
		let src = args.first().map(|arg| arg.field_type().max_len).unwrap_or(0);
		FieldType::binary_string(compress_bound(src).min(self.max_blob_width))
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		let Some(data) = ctx.string(0)? else {
			return Ok(None);
		};

		match codec::compress(&data) {
			Ok(payload) => Ok(Some(payload)),
			Err(err) => {
				trace!(%err, "compression failed");
				Ok(None)
			}
		}
	}
}
