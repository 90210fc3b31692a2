// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use serde::{Deserialize, Serialize};

/// Source text a diagnostic points at, usually the name of a called function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Fragment {
	#[default]
	None,
	/// Text produced by the engine itself, with no statement position.
	Internal {
		text: Arc<str>,
	},
	/// Text taken from a statement.
	Statement {
		text: Arc<str>,
		line: u32,
		column: u32,
	},
}

impl Fragment {
	pub fn internal(text: impl AsRef<str>) -> Self {
		Fragment::Internal {
			text: Arc::from(text.as_ref()),
		}
	}

	pub fn statement(text: impl AsRef<str>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: Arc::from(text.as_ref()),
			line,
			column,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Internal {
				text,
			} => text,
			Fragment::Statement {
				text,
				..
			} => text,
		}
	}

	/// Line and column, if the fragment came from a statement.
	pub fn position(&self) -> Option<(u32, u32)> {
		match self {
			Fragment::Statement {
				line,
				column,
				..
			} => Some((*line, *column)),
			_ => None,
		}
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

impl From<&str> for Fragment {
	fn from(value: &str) -> Self {
		Fragment::internal(value)
	}
}

impl From<String> for Fragment {
	fn from(value: String) -> Self {
		Fragment::internal(value)
	}
}
