// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use rowgen_tgl::{Invocation, SchemaSpec};
use rowgen_type::Type;

use crate::error::EngineError;
use crate::routine::{Row, RowIter};
use crate::schema::ResolvedOutput;
use crate::storage::Storage;

/// One output column: its name and its value-domain type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
	pub name: String,
	pub ty: Type,
}

/// A fully evaluated return-mode result: one descriptor per schema entry
/// plus the concrete row matrix.
#[derive(Debug, PartialEq)]
pub struct QueryResult {
	pub columns: Vec<ColumnDescriptor>,
	pub rows: Vec<Row>,
}

#[derive(Debug, PartialEq)]
pub enum MaterializationResult {
	/// Save mode: the rows went to the storage layer, the result carries
	/// none.
	TableWritten {
		table: String,
	},
	/// Return mode.
	Query(QueryResult),
}

impl MaterializationResult {
	pub fn into_query(self) -> Option<QueryResult> {
		match self {
			MaterializationResult::Query(query) => Some(query),
			MaterializationResult::TableWritten {
				..
			} => None,
		}
	}
}

/// Persist or return the resolved output. Schema type names are mapped to
/// the value domain before any row is pulled, in both modes; the row
/// collection is forced exactly once, here.
#[instrument(name = "engine::materialize", level = "debug", skip(invocation, resolved, storage))]
pub(crate) fn materialize(
	invocation: &Invocation,
	resolved: ResolvedOutput,
	storage: &dyn Storage,
) -> crate::Result<MaterializationResult> {
	let columns = map_columns(&resolved.schema)?;
	let rows = collect_rows(resolved.rows, columns.len(), invocation.routine())?;

	match invocation {
		Invocation::Save {
			table,
			..
		} => {
			storage.persist(table, &columns, rows).map_err(|source| EngineError::Persist {
				table: table.clone(),
				source,
			})?;
			debug!(table, "table written");
			Ok(MaterializationResult::TableWritten {
				table: table.clone(),
			})
		}
		Invocation::Basic {
			..
		} => {
			debug!(routine = invocation.routine(), rows = rows.len(), "result materialized");
			Ok(MaterializationResult::Query(QueryResult {
				columns,
				rows,
			}))
		}
	}
}

// The fixed mapping from schema type names to the value domain. Checked for
// the whole schema up front so no row is evaluated and no partial table is
// written when a name is unknown.
fn map_columns(schema: &SchemaSpec) -> crate::Result<Vec<ColumnDescriptor>> {
	schema.columns()
		.iter()
		.map(|column| {
			Type::from_schema_name(column.type_name())
				.map(|ty| ColumnDescriptor {
					name: column.name().to_string(),
					ty,
				})
				.ok_or_else(|| EngineError::UnknownColumnType {
					type_name: column.type_name().to_string(),
				})
		})
		.collect()
}

fn collect_rows(rows: RowIter, arity: usize, routine: &str) -> crate::Result<Vec<Row>> {
	let mut collected = Vec::new();
	for row in rows {
		if row.len() != arity {
			return Err(EngineError::RowArityMismatch {
				routine: routine.to_string(),
				expected: arity,
				actual: row.len(),
			});
		}
		collected.push(row);
	}
	Ok(collected)
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicBool, Ordering};

	use super::*;
	use crate::schema::ResolvedOutput;
	use crate::storage::MemoryStorage;
	use crate::Value;
	use rowgen_tgl::parse_schema;

	// Flags when the wrapped iterator is pulled, so tests can prove the
	// fail-fast ordering of the type-name check.
	struct Tracked {
		inner: std::vec::IntoIter<Row>,
		pulled: Arc<AtomicBool>,
	}

	impl Iterator for Tracked {
		type Item = Row;

		fn next(&mut self) -> Option<Row> {
			self.pulled.store(true, Ordering::SeqCst);
			self.inner.next()
		}
	}

	fn tracked(rows: Vec<Row>) -> (RowIter, Arc<AtomicBool>) {
		let pulled = Arc::new(AtomicBool::new(false));
		let iter = Tracked {
			inner: rows.into_iter(),
			pulled: pulled.clone(),
		};
		(Box::new(iter), pulled)
	}

	fn resolved(rows: Vec<Row>, schema: &str) -> ResolvedOutput {
		ResolvedOutput {
			rows: Box::new(rows.into_iter()),
			schema: parse_schema(schema).unwrap(),
		}
	}

	fn basic() -> Invocation {
		rowgen_tgl::parse_invocation("GENERATE f()").unwrap()
	}

	fn save(table: &str) -> Invocation {
		rowgen_tgl::parse_invocation(&format!("GENERATE f() SAVE AS {table}")).unwrap()
	}

	#[test]
	fn test_return_mode() {
		let storage = MemoryStorage::new();
		let rows = vec![vec![Value::int4(1), Value::utf8("a")], vec![Value::int4(2), Value::utf8("b")]];
		let result = materialize(&basic(), resolved(rows.clone(), "n int, s string"), &storage).unwrap();

		let query = result.into_query().unwrap();
		assert_eq!(
			query.columns,
			vec![
				ColumnDescriptor {
					name: "n".to_string(),
					ty: Type::Int4,
				},
				ColumnDescriptor {
					name: "s".to_string(),
					ty: Type::Utf8,
				},
			]
		);
		assert_eq!(query.rows, rows);
	}

	#[test]
	fn test_save_mode() {
		let storage = MemoryStorage::new();
		let rows = vec![vec![Value::int4(1)], vec![Value::int4(2)]];
		let result = materialize(&save("nums"), resolved(rows.clone(), "n int"), &storage).unwrap();

		assert!(matches!(result, MaterializationResult::TableWritten { table } if table == "nums"));
		let stored = storage.get("nums").unwrap();
		assert_eq!(stored.columns[0].name, "n");
		assert_eq!(stored.columns[0].ty, Type::Int4);
		assert_eq!(stored.rows, rows);
	}

	#[test]
	fn test_unknown_column_type_fails_before_rows_are_pulled() {
		let storage = MemoryStorage::new();
		let (rows, pulled) = tracked(vec![vec![Value::int4(1)]]);
		let output = ResolvedOutput {
			rows,
			schema: parse_schema("x bignum").unwrap(),
		};
		let err = materialize(&basic(), output, &storage).unwrap_err();
		assert!(matches!(err, EngineError::UnknownColumnType { type_name } if type_name == "bignum"));
		assert!(!pulled.load(Ordering::SeqCst));
	}

	#[test]
	fn test_unknown_column_type_in_save_mode_writes_nothing() {
		let storage = MemoryStorage::new();
		let (rows, pulled) = tracked(vec![vec![Value::int4(1)]]);
		let output = ResolvedOutput {
			rows,
			schema: parse_schema("x bignum, y int").unwrap(),
		};
		let err = materialize(&save("t"), output, &storage).unwrap_err();
		assert!(matches!(err, EngineError::UnknownColumnType { .. }));
		assert!(!pulled.load(Ordering::SeqCst));
		assert!(storage.get("t").is_none());
	}

	#[test]
	fn test_row_arity_mismatch() {
		let storage = MemoryStorage::new();
		let rows = vec![vec![Value::int4(1)], vec![Value::int4(2), Value::int4(3)]];
		let err = materialize(&basic(), resolved(rows, "n int"), &storage).unwrap_err();
		assert!(matches!(
			err,
			EngineError::RowArityMismatch {
				expected: 1,
				actual: 2,
				..
			}
		));
	}

	#[test]
	fn test_row_arity_checked_before_persist() {
		let storage = MemoryStorage::new();
		let rows = vec![vec![Value::int4(1), Value::int4(2)]];
		let err = materialize(&save("t"), resolved(rows, "n int"), &storage).unwrap_err();
		assert!(matches!(err, EngineError::RowArityMismatch { .. }));
		assert!(storage.get("t").is_none());
	}

	#[test]
	fn test_empty_rows() {
		let storage = MemoryStorage::new();
		let result = materialize(&basic(), resolved(vec![], "n int"), &storage).unwrap();
		let query = result.into_query().unwrap();
		assert_eq!(query.columns.len(), 1);
		assert!(query.rows.is_empty());
	}

	#[test]
	fn test_all_type_names_map() {
		let storage = MemoryStorage::new();
		let schema = "a boolean, b tinyint, c smallint, d int, e bigint, f float, g double, \
		              h string, i timestamp, j date";
		let result = materialize(&basic(), resolved(vec![], schema), &storage).unwrap();
		let query = result.into_query().unwrap();
		let types: Vec<Type> = query.columns.into_iter().map(|c| c.ty).collect();
		assert_eq!(
			types,
			vec![
				Type::Bool,
				Type::Int1,
				Type::Int2,
				Type::Int4,
				Type::Int8,
				Type::Float4,
				Type::Float8,
				Type::Utf8,
				Type::DateTime,
				Type::Date,
			]
		);
	}
}
