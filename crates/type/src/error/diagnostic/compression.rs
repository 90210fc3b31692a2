// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Compressed payload is too short or its zlib stream does not inflate
pub fn zlib_data_corrupted(function: Fragment) -> Diagnostic {
	Diagnostic {
		code: "COMPRESSION_001".to_string(),
		message: "ZLIB: Input data corrupted".to_string(),
		fragment: function,
		label: Some("wrong number of packed fields".to_string()),
		help: Some("The value was not produced by COMPRESS or has been truncated".to_string()),
		notes: vec![
			"A compressed payload is a 4-byte little-endian length followed by a zlib stream".to_string(),
		],
		cause: None,
	}
}
