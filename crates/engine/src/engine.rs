// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::sync::Arc;

use tracing::{debug, instrument};

use rowgen_tgl::parse_invocation;

use crate::context::ExecutionContext;
use crate::materialize::MaterializationResult;
use crate::registry::{Container, RoutineRegistry};
use crate::storage::{MemoryStorage, Storage};
use crate::{dispatch, materialize, schema, series};

/// The engine facade: a routine registry plus a storage handle. One call to
/// [`Engine::execute`] runs parse → resolve → invoke → resolve-schema →
/// materialize as a single blocking sequence; independent invocations share
/// no mutable state and may run concurrently.
pub struct Engine {
	registry: RoutineRegistry,
	storage: Arc<dyn Storage>,
}

impl Engine {
	pub fn builder() -> EngineBuilder {
		EngineBuilder::new()
	}

	#[instrument(name = "engine::execute", level = "debug", skip(self, ctx, command))]
	pub fn execute(
		&self,
		ctx: &Arc<dyn ExecutionContext>,
		command: &str,
	) -> crate::Result<MaterializationResult> {
		let invocation = parse_invocation(command)?;
		debug!(
			routine = invocation.routine(),
			params = invocation.params().len(),
			destination = invocation.destination(),
			"invocation parsed"
		);

		let entry_point = self.registry.resolve(invocation.routine())?;
		let output = dispatch::invoke(entry_point, ctx, invocation.routine(), invocation.params())?;
		let resolved = schema::resolve_output(output, entry_point, invocation.routine())?;
		materialize::materialize(&invocation, resolved, self.storage.as_ref())
	}

	pub fn registry(&self) -> &RoutineRegistry {
		&self.registry
	}
}

/// Startup configuration for an [`Engine`]: routine registration and the
/// storage handle. Storage defaults to [`MemoryStorage`].
pub struct EngineBuilder {
	registry: RoutineRegistry,
	storage: Option<Arc<dyn Storage>>,
}

impl EngineBuilder {
	pub fn new() -> Self {
		Self {
			registry: RoutineRegistry::new(),
			storage: None,
		}
	}

	pub fn register(mut self, container: Container) -> Self {
		self.registry.register(container);
		self
	}

	/// Register the bundled routines (`generate_series`).
	pub fn with_builtins(mut self) -> Self {
		self.registry.register(series::container());
		self
	}

	pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
		self.storage = Some(storage);
		self
	}

	pub fn build(self) -> Engine {
		Engine {
			registry: self.registry,
			storage: self.storage.unwrap_or_else(|| Arc::new(MemoryStorage::new())),
		}
	}
}

impl Default for EngineBuilder {
	fn default() -> Self {
		Self::new()
	}
}
