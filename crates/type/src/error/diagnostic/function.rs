// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::r#type::EvalType};

/// Function is not recognized or does not exist
pub fn unknown_function(function: Fragment) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unknown function: {}", name),
		fragment: function,
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with wrong number of arguments
pub fn arity_mismatch(function: Fragment, expected: usize, actual: usize) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!(
			"Incorrect parameter count in the call to native function '{}': expected {}, got {}",
			name, expected, actual
		),
		fragment: function,
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide exactly {} arguments to function {}", expected, name)),
		notes: vec![],
		cause: None,
	}
}

/// Argument has invalid type for function
pub fn invalid_argument_type(
	function: Fragment,
	index: usize,
	expected_one_of: Vec<EvalType>,
	actual: EvalType,
) -> Diagnostic {
	let name = function.text().to_string();
	let expected_types = expected_one_of.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");

	Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!(
			"Function {} argument {} has invalid type: expected one of [{}], got {}",
			name,
			index + 1,
			expected_types,
			actual
		),
		fragment: function,
		label: Some("invalid argument type".to_string()),
		help: Some(format!("Cast the argument to one of: {}", expected_types)),
		notes: vec![],
		cause: None,
	}
}

/// Function execution failed with a specific reason
pub fn execution_failed(function: Fragment, reason: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_007".to_string(),
		message: format!("Function {} execution failed: {}", name, reason),
		fragment: function,
		label: Some("execution failed".to_string()),
		help: Some("Check function arguments and data".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Internal function error - should not normally occur
pub fn internal_error(function: Fragment, details: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_008".to_string(),
		message: format!("Internal error in function {}: {}", name, details),
		fragment: function,
		label: Some("internal error".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function is known by name but has no implementation
pub fn function_not_exists(function: Fragment, name: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_010".to_string(),
		message: format!("FUNCTION {} does not exist", name),
		fragment: function,
		label: Some("function not supported".to_string()),
		help: None,
		notes: vec![format!("{} is recognised but not implemented", name)],
		cause: None,
	}
}
