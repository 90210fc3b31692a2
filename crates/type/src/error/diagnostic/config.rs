// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn unsupported_block_encryption_mode(mode: &str) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("Unsupported block_encryption_mode: '{}'", mode),
		fragment: Fragment::internal(mode),
		label: Some("unsupported mode".to_string()),
		help: Some("Use 'aes-128-ecb'".to_string()),
		notes: vec!["Only AES with a 128-bit key in ECB mode is implemented".to_string()],
		cause: None,
	}
}
