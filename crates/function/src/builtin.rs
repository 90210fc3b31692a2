// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::ExpressionRef;
use cryptofn_type::{EvalType, FieldType};

use crate::{
	ScalarFunction, ScalarFunctionContext,
	compression::{Compress, Uncompress, UncompressedLength},
	encryption::{AesDecrypt, AesEncrypt, Password, RandomBytes},
	error::ScalarFunctionResult,
	hash::{Md5, Sha1, Sha2},
	name::FunctionName,
};

/// One variant per implemented function. Dispatch is a `match`, so a bound
/// call never goes through a vtable.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
	AesDecrypt(AesDecrypt),
	AesEncrypt(AesEncrypt),
	Compress(Compress),
	Md5(Md5),
	Password(Password),
	RandomBytes(RandomBytes),
	Sha1(Sha1),
	Sha2(Sha2),
	Uncompress(Uncompress),
	UncompressedLength(UncompressedLength),
}

macro_rules! dispatch {
	($self:expr, $f:ident => $body:expr) => {
		match $self {
			Builtin::AesDecrypt($f) => $body,
			Builtin::AesEncrypt($f) => $body,
			Builtin::Compress($f) => $body,
			Builtin::Md5($f) => $body,
			Builtin::Password($f) => $body,
			Builtin::RandomBytes($f) => $body,
			Builtin::Sha1($f) => $body,
			Builtin::Sha2($f) => $body,
			Builtin::Uncompress($f) => $body,
			Builtin::UncompressedLength($f) => $body,
		}
	};
}

impl Builtin {
	pub fn name(&self) -> FunctionName {
		match self {
			Builtin::AesDecrypt(_) => FunctionName::AesDecrypt,
			Builtin::AesEncrypt(_) => FunctionName::AesEncrypt,
			Builtin::Compress(_) => FunctionName::Compress,
			Builtin::Md5(_) => FunctionName::Md5,
			Builtin::Password(_) => FunctionName::Password,
			Builtin::RandomBytes(_) => FunctionName::RandomBytes,
			Builtin::Sha1(_) => FunctionName::Sha1,
			Builtin::Sha2(_) => FunctionName::Sha2,
			Builtin::Uncompress(_) => FunctionName::Uncompress,
			Builtin::UncompressedLength(_) => FunctionName::UncompressedLength,
		}
	}
}

impl ScalarFunction for Builtin {
	fn arguments(&self) -> &'static [EvalType] {
		dispatch!(self, f => f.arguments())
	}

	fn return_type(&self, args: &[ExpressionRef]) -> FieldType {
		dispatch!(self, f => f.return_type(args))
	}

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		dispatch!(self, f => f.eval_string(ctx))
	}

	fn eval_int(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<i64>> {
		dispatch!(self, f => f.eval_int(ctx))
	}
}
