// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod row;
pub mod r#type;

use crate::{Result, error::diagnostic::value::invalid_integer, fragment::Fragment, return_error};

/// A single SQL value as seen by scalar functions. Strings are byte strings;
/// text and binary strings are distinguished by field type, not by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Value {
	#[default]
	Null,
	Int(i64),
	Bytes(Vec<u8>),
}

impl Value {
	pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
		Value::Bytes(value.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// String view of the value. Integers render in decimal.
	pub fn to_bytes(&self) -> Option<Vec<u8>> {
		match self {
			Value::Null => None,
			Value::Int(value) => Some(value.to_string().into_bytes()),
			Value::Bytes(bytes) => Some(bytes.clone()),
		}
	}

	/// Integer view of the value. Strings must hold decimal text.
	pub fn to_int(&self, fragment: impl FnOnce() -> Fragment) -> Result<Option<i64>> {
		match self {
			Value::Null => Ok(None),
			Value::Int(value) => Ok(Some(*value)),
			Value::Bytes(bytes) => {
				let parsed = std::str::from_utf8(bytes).ok().and_then(|text| text.trim().parse::<i64>().ok());
				match parsed {
					Some(value) => Ok(Some(value)),
					None => return_error!(invalid_integer(fragment(), bytes)),
				}
			}
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Int(value) => write!(f, "{}", value),
			Value::Bytes(bytes) => write!(f, "'{}'", String::from_utf8_lossy(bytes)),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Bytes(value.as_bytes().to_vec())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Value::Bytes(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod to_bytes {
		use super::*;

		#[test]
		fn test_null() {
			assert_eq!(Value::Null.to_bytes(), None);
		}

		#[test]
		fn test_int_renders_decimal() {
			assert_eq!(Value::Int(-42).to_bytes(), Some(b"-42".to_vec()));
		}

		#[test]
		fn test_bytes_are_copied() {
			assert_eq!(Value::bytes(vec![0u8, 255]).to_bytes(), Some(vec![0u8, 255]));
		}
	}

	mod to_int {
		use super::*;

		#[test]
		fn test_null() {
			assert_eq!(Value::Null.to_int(|| Fragment::None).unwrap(), None);
		}

		#[test]
		fn test_decimal_text() {
			assert_eq!(Value::from(" 256 ").to_int(|| Fragment::None).unwrap(), Some(256));
		}

		#[test]
		fn test_invalid_text() {
			let err = Value::from("abc").to_int(|| Fragment::internal("SHA2")).unwrap_err();
			assert_eq!(err.code, "VALUE_001");
			assert_eq!(err.fragment.text(), "SHA2");
		}
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(None::<i64>), Value::Null);
		assert_eq!(Value::from(Some(7i64)), Value::Int(7));
	}
}
