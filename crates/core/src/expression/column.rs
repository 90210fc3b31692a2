// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use cryptofn_type::{
	FieldType, Fragment, Result, Row, Value, error::diagnostic::internal::column_out_of_range, return_error,
};

use crate::{context::EvalContext, expression::Expression};

/// Reads one column of the current row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
	index: usize,
	name: Arc<str>,
	field_type: FieldType,
}

impl ColumnRef {
	pub fn new(index: usize, name: impl AsRef<str>, field_type: FieldType) -> Self {
		Self {
			index,
			name: Arc::from(name.as_ref()),
			field_type,
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	fn value<'a>(&self, row: &'a Row) -> Result<&'a Value> {
		match row.get(self.index) {
			Some(value) => Ok(value),
			None => return_error!(column_out_of_range(Fragment::internal(&*self.name), self.index, row.len())),
		}
	}
}

impl Expression for ColumnRef {
	fn field_type(&self) -> FieldType {
		self.field_type
	}

	fn eval_string(&self, _ctx: &EvalContext, row: &Row) -> Result<Option<Vec<u8>>> {
		Ok(self.value(row)?.to_bytes())
	}

	fn eval_int(&self, _ctx: &EvalContext, row: &Row) -> Result<Option<i64>> {
		self.value(row)?.to_int(|| Fragment::internal(&*self.name))
	}
}
