// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

pub mod compression;
pub mod config;
pub mod deprecated;
pub mod function;
pub mod internal;
pub mod number;
pub mod value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_fragment(mut self, fragment: Fragment) -> Self {
		self.fragment = fragment;
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some((line, column)) = self.fragment.position() {
			write!(f, " (at {}:{})", line, column)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\ncaused by: {}", cause)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_with_position() {
		let diagnostic = function::arity_mismatch(Fragment::statement("MD5", 1, 8), 1, 2);
		assert_eq!(diagnostic.to_string(), "[FUNCTION_002] Incorrect parameter count in the call to native function 'MD5': expected 1, got 2 (at 1:8)");
	}

	#[test]
	fn test_display_with_cause() {
		let cause = internal::column_out_of_range(Fragment::None, 3, 1);
		let diagnostic = function::execution_failed(Fragment::internal("MD5"), "argument failed".to_string())
			.with_cause(cause);
		let rendered = diagnostic.to_string();
		assert!(rendered.starts_with("[FUNCTION_007]"));
		assert!(rendered.contains("caused by: [INTERNAL_001]"));
	}

	#[test]
	fn test_serde_round_trip_keeps_code() {
		let diagnostic = compression::zlib_data_corrupted(Fragment::internal("UNCOMPRESS"));
		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
