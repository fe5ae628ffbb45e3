// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::BoxedError;
use crate::materialize::ColumnDescriptor;
use crate::routine::Row;

/// The storage collaborator save mode persists through. The engine hands
/// over fully evaluated, arity-checked rows; durability and atomicity of
/// the write itself are the implementor's concern.
pub trait Storage: Send + Sync {
	fn persist(&self, table: &str, columns: &[ColumnDescriptor], rows: Vec<Row>) -> Result<(), BoxedError>;
}

/// A persisted table as [`MemoryStorage`] holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredTable {
	pub columns: Vec<ColumnDescriptor>,
	pub rows: Vec<Row>,
}

/// In-memory storage, for embedders that do not bring their own backend and
/// for tests. A persisted name is replaced on re-persist.
pub struct MemoryStorage {
	tables: RwLock<HashMap<String, StoredTable>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self {
			tables: RwLock::new(HashMap::new()),
		}
	}

	pub fn get(&self, table: &str) -> Option<StoredTable> {
		self.tables.read().get(table).cloned()
	}

	pub fn table_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
		names.sort();
		names
	}
}

impl Default for MemoryStorage {
	fn default() -> Self {
		Self::new()
	}
}

impl Storage for MemoryStorage {
	fn persist(&self, table: &str, columns: &[ColumnDescriptor], rows: Vec<Row>) -> Result<(), BoxedError> {
		self.tables.write().insert(
			table.to_string(),
			StoredTable {
				columns: columns.to_vec(),
				rows,
			},
		);
		Ok(())
	}
}
