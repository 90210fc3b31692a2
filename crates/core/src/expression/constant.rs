// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_type::{FieldType, Fragment, Result, Row, Value};

use crate::{context::EvalContext, expression::Expression};

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
	value: Value,
	field_type: FieldType,
}

impl Constant {
	pub fn new(value: impl Into<Value>) -> Self {
		let value = value.into();
		let field_type = FieldType::of_value(&value);
		Self {
			value,
			field_type,
		}
	}

	/// A literal with an explicit field type, e.g. a NULL typed by a cast.
	pub fn typed(value: impl Into<Value>, field_type: FieldType) -> Self {
		Self {
			value: value.into(),
			field_type,
		}
	}

	pub fn null() -> Self {
		Self::new(Value::Null)
	}

	/// A literal binary string, as produced by `x'..'` or `_binary '..'`.
	pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
		let bytes = bytes.into();
		let field_type = FieldType::binary_string(bytes.len() as u64);
		Self {
			value: Value::Bytes(bytes),
			field_type,
		}
	}

	pub fn value(&self) -> &Value {
		&self.value
	}
}

impl Expression for Constant {
	fn field_type(&self) -> FieldType {
		self.field_type
	}

	fn eval_string(&self, _ctx: &EvalContext, _row: &Row) -> Result<Option<Vec<u8>>> {
		Ok(self.value.to_bytes())
	}

	fn eval_int(&self, _ctx: &EvalContext, _row: &Row) -> Result<Option<i64>> {
		self.value.to_int(|| Fragment::internal(self.value.to_string()))
	}
}
