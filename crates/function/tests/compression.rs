// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! COMPRESS, UNCOMPRESS and UNCOMPRESSED_LENGTH, including their
//! differing treatment of corrupted payloads

use std::sync::Arc;

use cryptofn_core::{EvalContext, Expression, ExpressionRef, FunctionConfig};
use cryptofn_function::{Functions, compression::codec};
use cryptofn_testing::{assert_no_warnings, assert_warnings, binary, init_tracing, null, string};
use cryptofn_type::{FieldType, Result, Row};

const CORRUPTED: &str = "COMPRESSION_001";

fn eval_string(name: &str, args: Vec<ExpressionRef>, ctx: &EvalContext) -> Result<Option<Vec<u8>>> {
	init_tracing();
	Functions::default().resolve(name, args)?.eval_string(ctx, &Row::empty())
}

fn eval_int(name: &str, args: Vec<ExpressionRef>, ctx: &EvalContext) -> Result<Option<i64>> {
	init_tracing();
	Functions::default().resolve(name, args)?.eval_int(ctx, &Row::empty())
}

mod compress {
	use super::*;

	#[test]
	fn test_empty_is_stored_as_empty() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_string("COMPRESS", vec![string("")], &ctx)?, Some(vec![]));
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_payload_layout() -> Result<()> {
		let ctx = EvalContext::new();
		let input = "a string with some repetition, repetition, repetition";
		let payload = eval_string("COMPRESS", vec![string(input)], &ctx)?.unwrap();

		let deflated = codec::deflate(input.as_bytes()).unwrap();
		assert_eq!(&payload[..4], &(input.len() as u32).to_le_bytes());
		assert_eq!(&payload[4..4 + deflated.len()], &deflated[..]);
		let suffix = if deflated.last() == Some(&b' ') { 1 } else { 0 };
		assert_eq!(payload.len(), 4 + deflated.len() + suffix);
		Ok(())
	}

	#[test]
	fn test_null() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_string("COMPRESS", vec![null()], &ctx)?, None);
		Ok(())
	}

	#[test]
	fn test_field_type() -> Result<()> {
		let bound = Functions::default().resolve("COMPRESS", vec![string(&"x".repeat(100))])?;
		assert_eq!(bound.field_type(), FieldType::binary_string(100 + 13));
		Ok(())
	}
}

mod uncompress {
	use super::*;

	#[test]
	fn test_round_trip() -> Result<()> {
		let functions = Functions::default();
		let ctx = EvalContext::new();
		for input in ["", "a", " ", "trailing space ", "x".repeat(10_000).as_str(), "ünïcødé"] {
			let compress = functions.resolve("COMPRESS", vec![string(input)])?;
			let uncompress = functions.resolve("UNCOMPRESS", vec![Arc::new(compress) as ExpressionRef])?;
			assert_eq!(uncompress.eval_string(&ctx, &Row::empty())?, Some(input.as_bytes().to_vec()));
		}
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_round_trip_trailing_dot() -> Result<()> {
		let functions = Functions::default();
		let ctx = EvalContext::new();
		let input = "payload5";

		let compress = functions.resolve("COMPRESS", vec![string(input)])?;
		let payload = compress.eval_string(&ctx, &Row::empty())?.unwrap();
		assert_eq!(payload.last(), Some(&b'.'));
		assert_eq!(payload.len(), 4 + codec::deflate(input.as_bytes()).unwrap().len() + 1);

		let uncompress = functions.resolve("UNCOMPRESS", vec![Arc::new(compress) as ExpressionRef])?;
		assert_eq!(uncompress.eval_string(&ctx, &Row::empty())?, Some(input.as_bytes().to_vec()));
		assert_eq!(eval_string("UNCOMPRESS", vec![binary(payload)], &ctx)?, Some(input.as_bytes().to_vec()));
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_empty() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_string("UNCOMPRESS", vec![string("")], &ctx)?, Some(vec![]));
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_short_payload_is_null_with_warning() -> Result<()> {
		for len in 1..=4 {
			let ctx = EvalContext::new();
			assert_eq!(eval_string("UNCOMPRESS", vec![binary(vec![0u8; len])], &ctx)?, None);
			assert_warnings(&ctx, &[CORRUPTED]);
		}
		Ok(())
	}

	#[test]
	fn test_garbage_is_null_with_warning() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_string("UNCOMPRESS", vec![string("not compressed at all")], &ctx)?, None);
		assert_warnings(&ctx, &[CORRUPTED]);
		Ok(())
	}

	#[test]
	fn test_null() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_string("UNCOMPRESS", vec![null()], &ctx)?, None);
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_output_limited_by_max_blob_width() -> Result<()> {
		let functions = Functions::new(FunctionConfig::new().max_blob_width(1_000));
		let payload = codec::compress(&vec![b'a'; 5_000]).unwrap();
		let ctx = EvalContext::new();
		let bound = functions.resolve("UNCOMPRESS", vec![binary(payload)])?;
		assert_eq!(bound.eval_string(&ctx, &Row::empty())?, None);
		assert_warnings(&ctx, &[CORRUPTED]);
		Ok(())
	}
}

mod uncompressed_length {
	use super::*;

	#[test]
	fn test_reads_prefix() -> Result<()> {
		let ctx = EvalContext::new();
		let payload = codec::compress(&vec![b'z'; 4242]).unwrap();
		assert_eq!(eval_int("UNCOMPRESSED_LENGTH", vec![binary(payload)], &ctx)?, Some(4242));
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_empty_is_zero() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_int("UNCOMPRESSED_LENGTH", vec![string("")], &ctx)?, Some(0));
		assert_no_warnings(&ctx);
		Ok(())
	}

	#[test]
	fn test_short_payload_is_zero_with_warning() -> Result<()> {
		for len in 1..=4 {
			let ctx = EvalContext::new();
			assert_eq!(eval_int("UNCOMPRESSED_LENGTH", vec![binary(vec![9u8; len])], &ctx)?, Some(0));
			assert_warnings(&ctx, &[CORRUPTED]);
		}
		Ok(())
	}

	#[test]
	fn test_null() -> Result<()> {
		let ctx = EvalContext::new();
		assert_eq!(eval_int("UNCOMPRESSED_LENGTH", vec![null()], &ctx)?, None);
		Ok(())
	}

	#[test]
	fn test_is_an_integer_function() -> Result<()> {
		let bound = Functions::default().resolve("UNCOMPRESSED_LENGTH", vec![string("x")])?;
		assert_eq!(bound.field_type(), FieldType::int(10));

		let err = bound.eval_string(&EvalContext::new(), &Row::empty()).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_008");
		Ok(())
	}
}
