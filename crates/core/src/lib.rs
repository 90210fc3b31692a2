// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod config;
pub mod context;
pub mod expression;

pub use config::{BlockEncryptionMode, FunctionConfig};
pub use context::EvalContext;
pub use expression::{Expression, ExpressionRef, column::ColumnRef, constant::Constant};
