// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use cryptofn_core::{EvalContext, Expression, ExpressionRef};
use cryptofn_type::{FieldType, Fragment, Result, Row};

use crate::{
	ScalarFunction, ScalarFunctionContext, builtin::Builtin, error::ScalarFunctionResult, name::FunctionName,
};

/// Argument expressions of a resolved call. Immutable once bound; clones
/// share the same expressions.
#[derive(Debug, Clone)]
pub struct BoundArgs(Arc<[ExpressionRef]>);

impl BoundArgs {
	pub fn new(args: Vec<ExpressionRef>) -> Self {
		Self(args.into())
	}
}

impl Deref for BoundArgs {
	type Target = [ExpressionRef];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// A call site after resolution: the evaluator, its bound arguments and the
/// statically computed result type.
#[derive(Debug, Clone)]
pub struct BoundFunction {
	builtin: Builtin,
	fragment: Fragment,
	args: BoundArgs,
	field_type: FieldType,
}

impl BoundFunction {
	pub(crate) fn new(builtin: Builtin, fragment: Fragment, args: BoundArgs) -> Self {
		let field_type = builtin.return_type(&args);
		Self {
			builtin,
			fragment,
			args,
			field_type,
		}
	}

	pub fn name(&self) -> FunctionName {
		self.builtin.name()
	}

	pub fn fragment(&self) -> &Fragment {
		&self.fragment
	}

	pub fn args(&self) -> &BoundArgs {
		&self.args
	}

	pub fn field_type(&self) -> FieldType {
		self.field_type
	}

	pub fn max_len(&self) -> u64 {
		self.field_type.max_len
	}

	pub fn is_binary(&self) -> bool {
		self.field_type.binary
	}

	pub fn evaluate_string(&self, eval: &EvalContext, row: &Row) -> ScalarFunctionResult<Option<Vec<u8>>> {
		self.builtin.eval_string(self.context(eval, row))
	}

	pub fn evaluate_int(&self, eval: &EvalContext, row: &Row) -> ScalarFunctionResult<Option<i64>> {
		self.builtin.eval_int(self.context(eval, row))
	}

	fn context<'a>(&'a self, eval: &'a EvalContext, row: &'a Row) -> ScalarFunctionContext<'a> {
		ScalarFunctionContext {
			fragment: &self.fragment,
			args: &self.args,
			eval,
			row,
		}
	}
}

impl Expression for BoundFunction {
	fn field_type(&self) -> FieldType {
		self.field_type
	}

	fn eval_string(&self, ctx: &EvalContext, row: &Row) -> Result<Option<Vec<u8>>> {
		Ok(self.evaluate_string(ctx, row)?)
	}

	fn eval_int(&self, ctx: &EvalContext, row: &Row) -> Result<Option<i64>> {
		Ok(self.evaluate_int(ctx, row)?)
	}
}
