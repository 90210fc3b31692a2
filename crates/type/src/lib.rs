// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Error, IntoDiagnostic, Result, diagnostic::Diagnostic};
pub use fragment::Fragment;
pub use value::{
	Value,
	row::Row,
	r#type::{EvalType, FieldType, MAX_BLOB_WIDTH},
};
