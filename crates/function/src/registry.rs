// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, ops::Deref, sync::Arc};

use cryptofn_core::{ExpressionRef, FunctionConfig};
use cryptofn_type::Fragment;
use tracing::{instrument, trace};

use crate::{
	ScalarFunction,
	bound::{BoundArgs, BoundFunction},
	error::{ScalarFunctionError, ScalarFunctionResult},
	name::FunctionName,
};

/// Lookup table from SQL name to builtin, plus the configuration every
/// resolution is made against.
#[derive(Debug, Clone)]
pub struct Functions(Arc<FunctionsInner>);

impl Functions {
	pub fn new(config: FunctionConfig) -> Functions {
		Functions::builder().with_config(config).build()
	}

	/// A builder already holding every known name and the `SHA` alias.
	pub fn builder() -> FunctionsBuilder {
		let mut names = HashMap::new();
		for name in FunctionName::ALL {
			names.insert(name.as_str().to_string(), name);
		}
		names.insert("SHA".to_string(), FunctionName::Sha1);

		FunctionsBuilder {
			inner: FunctionsInner {
				names,
				config: FunctionConfig::default(),
			},
		}
	}
}

impl Default for Functions {
	fn default() -> Self {
		Functions::new(FunctionConfig::default())
	}
}

impl Deref for Functions {
	type Target = FunctionsInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Debug, Clone)]
pub struct FunctionsInner {
	names: HashMap<String, FunctionName>,
	config: FunctionConfig,
}

impl FunctionsInner {
	pub fn config(&self) -> &FunctionConfig {
		&self.config
	}

	/// Case-insensitive name lookup.
	pub fn lookup(&self, name: &str) -> Option<FunctionName> {
		self.names.get(&name.to_ascii_uppercase()).copied()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.lookup(name).is_some()
	}

	/// Resolves a call site: validates the arguments against the function's
	/// fixed contract and binds them.
	pub fn resolve(&self, name: impl Into<Fragment>, args: Vec<ExpressionRef>) -> ScalarFunctionResult<BoundFunction> {
		self.resolve_fragment(name.into(), args)
	}

	#[instrument(name = "function::resolve", level = "trace", skip_all, fields(function = %fragment, args = args.len()))]
	fn resolve_fragment(&self, fragment: Fragment, args: Vec<ExpressionRef>) -> ScalarFunctionResult<BoundFunction> {
		let Some(name) = self.lookup(fragment.text()) else {
			return Err(ScalarFunctionError::UnknownFunction {
				function: fragment,
			});
		};

		let Some(builtin) = name.builtin(&self.config) else {
			return Err(ScalarFunctionError::NotExists {
				function: fragment,
				name: name.as_str(),
			});
		};

		let slots = builtin.arguments();
		if args.len() != slots.len() {
			return Err(ScalarFunctionError::ArityMismatch {
				function: fragment,
				expected: slots.len(),
				actual: args.len(),
			});
		}

		for (index, (arg, slot)) in args.iter().zip(slots).enumerate() {
			let actual = arg.field_type().eval_type;
			if !actual.fits(*slot) {
				return Err(ScalarFunctionError::InvalidArgumentType {
					function: fragment,
					argument_index: index,
					expected: vec![*slot],
					actual,
				});
			}
		}

		let bound = BoundFunction::new(builtin, fragment, BoundArgs::new(args));
		trace!(max_len = bound.max_len(), binary = bound.is_binary(), "resolved");
		Ok(bound)
	}
}

pub struct FunctionsBuilder {
	inner: FunctionsInner,
}

impl FunctionsBuilder {
	pub fn with_config(mut self, config: FunctionConfig) -> Self {
		self.inner.config = config;
		self
	}

	/// Makes `alias` resolve to `name`.
	pub fn with_alias(mut self, alias: &str, name: FunctionName) -> Self {
		self.inner.names.insert(alias.to_ascii_uppercase(), name);
		self
	}

	pub fn build(self) -> Functions {
		Functions(Arc::new(self.inner))
	}
}
