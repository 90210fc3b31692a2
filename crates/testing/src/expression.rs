// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shorthand constructors for argument expressions.

use std::sync::Arc;

use cryptofn_core::{ColumnRef, Constant, EvalContext, Expression, ExpressionRef};
use cryptofn_type::{
	Error, EvalType, FieldType, Fragment, Result, Row, Value, error::diagnostic::function::execution_failed,
};

pub fn string(value: &str) -> ExpressionRef {
	Arc::new(Constant::new(value))
}

pub fn binary(value: impl Into<Vec<u8>>) -> ExpressionRef {
	Arc::new(Constant::binary(value))
}

pub fn int(value: i64) -> ExpressionRef {
	Arc::new(Constant::new(value))
}

/// Untyped NULL literal.
pub fn null() -> ExpressionRef {
	Arc::new(Constant::null())
}

pub fn null_string() -> ExpressionRef {
	Arc::new(Constant::typed(Value::Null, FieldType::string(0)))
}

pub fn null_int() -> ExpressionRef {
	Arc::new(Constant::typed(Value::Null, FieldType::int(0)))
}

pub fn column(index: usize, field_type: FieldType) -> ExpressionRef {
	Arc::new(ColumnRef::new(index, format!("c{}", index), field_type))
}

/// An argument whose evaluation always raises `FUNCTION_007`.
pub fn failing(eval_type: EvalType) -> ExpressionRef {
	Arc::new(Failing {
		eval_type,
	})
}

#[derive(Debug)]
struct Failing {
	eval_type: EvalType,
}

impl Failing {
	fn error(&self) -> Error {
		execution_failed(Fragment::internal("failing"), "argument evaluation failed".to_string()).into()
	}
}

impl Expression for Failing {
	fn field_type(&self) -> FieldType {
		match self.eval_type {
			EvalType::Int => FieldType::int(1),
			EvalType::String => FieldType::string(1),
			EvalType::Null => FieldType::null(),
		}
	}

	fn eval_string(&self, _ctx: &EvalContext, _row: &Row) -> Result<Option<Vec<u8>>> {
		Err(self.error())
	}

	fn eval_int(&self, _ctx: &EvalContext, _row: &Row) -> Result<Option<i64>> {
		Err(self.error())
	}
}
