// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::{EvalContext, ExpressionRef};
use cryptofn_type::{Diagnostic, EvalType, FieldType, Fragment, Row};

pub mod bound;
pub mod builtin;
pub mod compression;
pub mod encryption;
pub mod error;
pub mod hash;
pub mod name;
pub mod registry;

pub use bound::{BoundArgs, BoundFunction};
pub use builtin::Builtin;
pub use error::{ScalarFunctionError, ScalarFunctionResult};
pub use name::FunctionName;
pub use registry::Functions;

/// Everything an evaluator sees for one row.
pub struct ScalarFunctionContext<'a> {
	pub fragment: &'a Fragment,
	pub args: &'a [ExpressionRef],
	pub eval: &'a EvalContext,
	pub row: &'a Row,
}

impl<'a> ScalarFunctionContext<'a> {
	/// Evaluates argument `index` as a byte string. `None` is SQL NULL.
	pub fn string(&self, index: usize) -> ScalarFunctionResult<Option<Vec<u8>>> {
		Ok(self.arg(index)?.eval_string(self.eval, self.row)?)
	}

	/// Evaluates argument `index` as an integer. `None` is SQL NULL.
	pub fn int(&self, index: usize) -> ScalarFunctionResult<Option<i64>> {
		Ok(self.arg(index)?.eval_int(self.eval, self.row)?)
	}

	pub fn warn(&self, diagnostic: Diagnostic) {
		self.eval.append_warning(diagnostic);
	}

	pub fn internal(&self, details: impl Into<String>) -> ScalarFunctionError {
		ScalarFunctionError::Internal {
			function: self.fragment.clone(),
			details: details.into(),
		}
	}

	fn arg(&self, index: usize) -> ScalarFunctionResult<&ExpressionRef> {
		self.args.get(index).ok_or_else(|| self.internal(format!("argument {} is not bound", index)))
	}
}

/// A builtin's resolve/evaluate pair.
///
/// Resolution checks the call against `arguments()` and asks `return_type()`
/// for the static result metadata. Evaluation runs once per row through
/// whichever of `eval_string` / `eval_int` matches the result type; the
/// other one is never expected to be called.
pub trait ScalarFunction: Send + Sync {
	/// Argument kinds, one per slot. The length is the arity.
	fn arguments(&self) -> &'static [EvalType];

	fn return_type(&self, args: &[ExpressionRef]) -> FieldType;

	fn eval_string(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<Vec<u8>>> {
		Err(ctx.internal("function does not produce a string"))
	}

	fn eval_int(&self, ctx: ScalarFunctionContext) -> ScalarFunctionResult<Option<i64>> {
		Err(ctx.internal("function does not produce an integer"))
	}
}
