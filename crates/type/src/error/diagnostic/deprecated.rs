// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Syntax or function that is deprecated and has no replacement
pub fn deprecated_no_replacement(fragment: Fragment, name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPRECATED_001".to_string(),
		message: format!("'{}' is deprecated and will be removed in a future release.", name),
		fragment,
		label: Some("deprecated".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
