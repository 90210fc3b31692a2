// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Value lies outside the range accepted by an operation
pub fn out_of_range(fragment: Fragment, what: &str, context: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_001".to_string(),
		message: format!("{} value is out of range in '{}'", what, context),
		fragment,
		label: Some("value out of range".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
