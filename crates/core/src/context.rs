// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use cryptofn_type::Diagnostic;
use parking_lot::Mutex;
use tracing::debug;

/// Per-statement evaluation context. Collects warnings raised while rows are
/// evaluated; the statement drains them once it completes.
#[derive(Debug, Default)]
pub struct EvalContext {
	warnings: Mutex<Vec<Diagnostic>>,
}

impl EvalContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a non-fatal diagnostic. Evaluation continues.
	pub fn append_warning(&self, warning: Diagnostic) {
		debug!(code = %warning.code, message = %warning.message, "warning appended");
		self.warnings.lock().push(warning);
	}

	pub fn warnings(&self) -> Vec<Diagnostic> {
		self.warnings.lock().clone()
	}

	pub fn warning_count(&self) -> usize {
		self.warnings.lock().len()
	}

	pub fn take_warnings(&self) -> Vec<Diagnostic> {
		mem::take(&mut *self.warnings.lock())
	}
}
