// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_core::EvalContext;

/// Drains the context and asserts the warning codes, in order.
pub fn assert_warnings(ctx: &EvalContext, expected: &[&str]) {
	let codes: Vec<String> = ctx.take_warnings().into_iter().map(|w| w.code).collect();
	assert_eq!(codes, expected, "unexpected warnings");
}

pub fn assert_no_warnings(ctx: &EvalContext) {
	assert_warnings(ctx, &[]);
}
