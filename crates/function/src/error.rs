// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cryptofn_type::{
	Diagnostic, Error, EvalType, Fragment, IntoDiagnostic,
	error::diagnostic::{function, number},
};

pub type ScalarFunctionResult<T> = Result<T, ScalarFunctionError>;

#[derive(Debug, thiserror::Error)]
pub enum ScalarFunctionError {
	#[error("unknown function {function}")]
	UnknownFunction {
		function: Fragment,
	},

	#[error("FUNCTION {name} does not exist")]
	NotExists {
		function: Fragment,
		name: &'static str,
	},

	#[error("function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: Fragment,
		expected: usize,
		actual: usize,
	},

	#[error("function {function} argument at index {argument_index} has invalid type {actual}")]
	InvalidArgumentType {
		function: Fragment,
		argument_index: usize,
		expected: Vec<EvalType>,
		actual: EvalType,
	},

	#[error("{what} value is out of range in '{context}'")]
	OutOfRange {
		function: Fragment,
		what: &'static str,
		context: &'static str,
	},

	#[error("internal error in function {function}: {details}")]
	Internal {
		function: Fragment,
		details: String,
	},

	/// An argument raised an error; forwarded unchanged.
	#[error(transparent)]
	Argument(#[from] Error),
}

impl IntoDiagnostic for ScalarFunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ScalarFunctionError::UnknownFunction {
				function,
			} => function::unknown_function(function),
			ScalarFunctionError::NotExists {
				function,
				name,
			} => function::function_not_exists(function, name),
			ScalarFunctionError::ArityMismatch {
				function,
				expected,
				actual,
			} => function::arity_mismatch(function, expected, actual),
			ScalarFunctionError::InvalidArgumentType {
				function,
				argument_index,
				expected,
				actual,
			} => function::invalid_argument_type(function, argument_index, expected, actual),
			ScalarFunctionError::OutOfRange {
				function,
				what,
				context,
			} => number::out_of_range(function, what, context),
			ScalarFunctionError::Internal {
				function,
				details,
			} => function::internal_error(function, details),
			ScalarFunctionError::Argument(err) => err.diagnostic(),
		}
	}
}

impl From<ScalarFunctionError> for Error {
	fn from(err: ScalarFunctionError) -> Self {
		match err {
			ScalarFunctionError::Argument(err) => err,
			err => Error::from(err.into_diagnostic()),
		}
	}
}

#[cfg(test)]
mod tests {
	use cryptofn_type::error::diagnostic::function::execution_failed;

	use super::*;

	#[test]
	fn test_argument_error_is_forwarded_unchanged() {
		let original: Error = execution_failed(Fragment::internal("col"), "boom".to_string()).into();
		let err: Error = ScalarFunctionError::Argument(original.clone()).into();
		assert_eq!(err, original);
	}

	#[test]
	fn test_not_exists_names_function() {
		let err: Error = ScalarFunctionError::NotExists {
			function: Fragment::internal("encode"),
			name: "ENCODE",
		}
		.into();
		assert_eq!(err.code(), "FUNCTION_010");
		assert_eq!(err.message, "FUNCTION ENCODE does not exist");
	}

	#[test]
	fn test_out_of_range_message() {
		let err: Error = ScalarFunctionError::OutOfRange {
			function: Fragment::internal("RANDOM_BYTES"),
			what: "length",
			context: "random_bytes",
		}
		.into();
		assert_eq!(err.code(), "NUMBER_001");
		assert_eq!(err.message, "length value is out of range in 'random_bytes'");
	}
}
