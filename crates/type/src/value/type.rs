// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Widest value a blob column can hold (LONGBLOB).
pub const MAX_BLOB_WIDTH: u64 = 4_294_967_295;

/// Digits needed to print any 32-bit unsigned integer.
pub const INT_DISPLAY_WIDTH: u64 = 10;

/// Type an expression is evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvalType {
	Int,
	String,
	/// Untyped NULL literal, accepted wherever a value is.
	Null,
}

impl EvalType {
	/// Whether a value of this type may fill a slot declared as `slot`.
	pub fn fits(&self, slot: EvalType) -> bool {
		match (self, slot) {
			(EvalType::Null, _) => true,
			(EvalType::Int, EvalType::Int) => true,
			// integers render as decimal text
			(EvalType::Int, EvalType::String) => true,
			(EvalType::String, EvalType::String) => true,
			_ => false,
		}
	}
}

impl Display for EvalType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			EvalType::Int => f.write_str("INT"),
			EvalType::String => f.write_str("STRING"),
			EvalType::Null => f.write_str("NULL"),
		}
	}
}

/// Statically known result metadata of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldType {
	pub eval_type: EvalType,
	/// Upper bound on the byte length of any value.
	pub max_len: u64,
	/// Values are uninterpreted bytes rather than text.
	pub binary: bool,
}

impl FieldType {
	pub fn string(max_len: u64) -> Self {
		Self {
			eval_type: EvalType::String,
			max_len,
			binary: false,
		}
	}

	pub fn binary_string(max_len: u64) -> Self {
		Self {
			eval_type: EvalType::String,
			max_len,
			binary: true,
		}
	}

	pub fn int(max_len: u64) -> Self {
		Self {
			eval_type: EvalType::Int,
			max_len,
			binary: false,
		}
	}

	pub fn null() -> Self {
		Self {
			eval_type: EvalType::Null,
			max_len: 0,
			binary: false,
		}
	}

	/// Field type of a literal, sized to the literal itself.
	pub fn of_value(value: &Value) -> Self {
		match value {
			Value::Null => Self::null(),
			Value::Int(value) => Self::int(value.to_string().len() as u64),
			Value::Bytes(bytes) => Self::string(bytes.len() as u64),
		}
	}
}
