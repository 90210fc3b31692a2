// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Row does not have the column an expression was bound to
pub fn column_out_of_range(fragment: Fragment, index: usize, width: usize) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: format!("Column index {} is out of range for a row of {} values", index, width),
		fragment,
		label: Some("column out of range".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
		cause: None,
	}
}
