// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, sync::Arc};

use cryptofn_type::{FieldType, Result, Row};

use crate::context::EvalContext;

pub mod column;
pub mod constant;

/// A node of the expression tree that can be evaluated against a row.
///
/// `Ok(None)` is SQL NULL. `Err` is a raised evaluation error and aborts the
/// statement unless the caller decides otherwise.
pub trait Expression: Debug + Send + Sync {
	fn field_type(&self) -> FieldType;

	fn eval_string(&self, ctx: &EvalContext, row: &Row) -> Result<Option<Vec<u8>>>;

	fn eval_int(&self, ctx: &EvalContext, row: &Row) -> Result<Option<i64>>;
}

/// Sub-expressions are shared between the call sites and clones that use them.
pub type ExpressionRef = Arc<dyn Expression>;
