// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod expression;
pub mod subscriber;
pub mod warning;

pub use expression::{binary, column, failing, int, null, null_int, null_string, string};
pub use subscriber::init_tracing;
pub use warning::{assert_no_warnings, assert_warnings};
