// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn invalid_integer(fragment: Fragment, text: &[u8]) -> Diagnostic {
	Diagnostic {
		code: "VALUE_001".to_string(),
		message: format!("Truncated incorrect INTEGER value: '{}'", String::from_utf8_lossy(text)),
		fragment,
		label: Some("not an integer".to_string()),
		help: Some("Cast the value to an integer before passing it".to_string()),
		notes: vec![],
		cause: None,
	}
}
