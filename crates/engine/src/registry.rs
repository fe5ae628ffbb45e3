// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::error::EngineError;
use crate::routine::{ParamType, Routine};

/// The conventional entry point name every container is expected to expose
/// exactly once.
pub const ENTRY_POINT: &str = "apply";

/// The declared parameter type sequence of an entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
	params: Vec<ParamType>,
}

impl Signature {
	pub fn new(params: impl Into<Vec<ParamType>>) -> Self {
		Self {
			params: params.into(),
		}
	}

	pub fn params(&self) -> &[ParamType] {
		&self.params
	}

	pub fn arity(&self) -> usize {
		self.params.len()
	}

	/// Whether the first declared parameter is the execution context. This
	/// is a structural check on the closed type enum, not a name match.
	pub fn expects_context(&self) -> bool {
		matches!(self.params.first(), Some(ParamType::Context))
	}
}

/// A callable entry point: name, declared signature, optional schema
/// metadata and the routine itself.
pub struct EntryPoint {
	name: String,
	signature: Signature,
	schema: Option<String>,
	routine: Arc<dyn Routine>,
}

impl EntryPoint {
	pub fn new(
		name: impl Into<String>,
		params: impl Into<Vec<ParamType>>,
		routine: impl Routine + 'static,
	) -> Self {
		Self {
			name: name.into(),
			signature: Signature::new(params),
			schema: None,
			routine: Arc::new(routine),
		}
	}

	/// An entry point with the conventional `apply` name.
	pub fn apply(params: impl Into<Vec<ParamType>>, routine: impl Routine + 'static) -> Self {
		Self::new(ENTRY_POINT, params, routine)
	}

	/// Attach a schema spec as metadata. Annotated outputs are resolved
	/// against it.
	pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = Some(schema.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	pub fn schema(&self) -> Option<&str> {
		self.schema.as_deref()
	}

	pub fn routine(&self) -> &Arc<dyn Routine> {
		&self.routine
	}
}

impl std::fmt::Debug for EntryPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EntryPoint")
			.field("name", &self.name)
			.field("signature", &self.signature)
			.field("schema", &self.schema)
			.finish_non_exhaustive()
	}
}

/// A named container of entry points, registered under the routine's
/// qualified name.
pub struct Container {
	name: String,
	entry_points: Vec<EntryPoint>,
}

impl Container {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			entry_points: Vec::new(),
		}
	}

	pub fn with_entry_point(mut self, entry_point: EntryPoint) -> Self {
		self.entry_points.push(entry_point);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Maps qualified routine names to containers. Populated at startup;
/// lookups never mutate, so concurrent resolution needs no synchronization.
pub struct RoutineRegistry {
	containers: HashMap<String, Container>,
}

impl RoutineRegistry {
	pub fn new() -> Self {
		Self {
			containers: HashMap::new(),
		}
	}

	/// Register a container under its name, replacing any previous one.
	pub fn register(&mut self, container: Container) {
		trace!(routine = container.name(), "register routine container");
		self.containers.insert(container.name().to_string(), container);
	}

	/// Resolve a routine name to its single `apply` entry point.
	pub fn resolve(&self, name: &str) -> crate::Result<&EntryPoint> {
		let container = self.containers.get(name).ok_or_else(|| EngineError::UnknownRoutine {
			name: name.to_string(),
		})?;

		let mut candidates = container.entry_points.iter().filter(|ep| ep.name() == ENTRY_POINT);
		let Some(entry_point) = candidates.next() else {
			return Err(EngineError::MissingEntryPoint {
				routine: name.to_string(),
				entry_point: ENTRY_POINT,
			});
		};
		if candidates.next().is_some() {
			let count = container.entry_points.iter().filter(|ep| ep.name() == ENTRY_POINT).count();
			return Err(EngineError::AmbiguousEntryPoint {
				routine: name.to_string(),
				entry_point: ENTRY_POINT,
				count,
			});
		}

		trace!(routine = name, arity = entry_point.signature().arity(), "routine resolved");
		Ok(entry_point)
	}
}

impl Default for RoutineRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::routine::{Argument, Output};
	use crate::{BoxedError, EngineError};

	const NO_PARAMS: [ParamType; 0] = [];

	fn noop(_args: Vec<Argument>) -> Result<Output, BoxedError> {
		Ok(Output::explicit(Vec::<crate::Row>::new(), ""))
	}

	#[test]
	fn test_resolve_unknown_routine() {
		let registry = RoutineRegistry::new();
		let err = registry.resolve("nope").unwrap_err();
		assert!(matches!(err, EngineError::UnknownRoutine { name } if name == "nope"));
	}

	#[test]
	fn test_resolve_missing_entry_point() {
		let mut registry = RoutineRegistry::new();
		registry.register(Container::new("empty"));
		let err = registry.resolve("empty").unwrap_err();
		assert!(matches!(err, EngineError::MissingEntryPoint { routine, .. } if routine == "empty"));
	}

	#[test]
	fn test_resolve_ignores_other_entry_points() {
		let mut registry = RoutineRegistry::new();
		registry.register(
			Container::new("gen")
				.with_entry_point(EntryPoint::new("helper", NO_PARAMS, noop))
				.with_entry_point(EntryPoint::apply([ParamType::Int4], noop)),
		);
		let entry_point = registry.resolve("gen").unwrap();
		assert_eq!(entry_point.name(), "apply");
		assert_eq!(entry_point.signature().params(), &[ParamType::Int4]);
	}

	#[test]
	fn test_resolve_ambiguous_entry_point() {
		let mut registry = RoutineRegistry::new();
		registry.register(
			Container::new("gen")
				.with_entry_point(EntryPoint::apply(NO_PARAMS, noop))
				.with_entry_point(EntryPoint::apply([ParamType::Int4], noop)),
		);
		let err = registry.resolve("gen").unwrap_err();
		assert!(matches!(err, EngineError::AmbiguousEntryPoint { count: 2, .. }));
	}

	#[test]
	fn test_register_replaces() {
		let mut registry = RoutineRegistry::new();
		registry.register(Container::new("gen").with_entry_point(EntryPoint::apply(NO_PARAMS, noop)));
		registry.register(
			Container::new("gen").with_entry_point(EntryPoint::apply([ParamType::Utf8], noop)),
		);
		let entry_point = registry.resolve("gen").unwrap();
		assert_eq!(entry_point.signature().params(), &[ParamType::Utf8]);
	}

	#[test]
	fn test_expects_context() {
		assert!(Signature::new([ParamType::Context, ParamType::Int4]).expects_context());
		assert!(!Signature::new([ParamType::Int4, ParamType::Context]).expects_context());
		assert!(!Signature::new(NO_PARAMS).expects_context());
	}

	#[test]
	fn test_schema_metadata() {
		let entry_point = EntryPoint::apply(NO_PARAMS, noop).with_schema("n int");
		assert_eq!(entry_point.schema(), Some("n int"));
		assert_eq!(EntryPoint::apply(NO_PARAMS, noop).schema(), None);
	}
}
