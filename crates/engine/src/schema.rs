// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use tracing::{instrument, trace};

use rowgen_tgl::{SchemaSpec, parse_schema};

use crate::error::{EngineError, SchemaResolutionReason};
use crate::registry::EntryPoint;
use crate::routine::{Output, RowIter};

/// The normalized form both materialization paths consume: the row
/// collection plus its resolved schema.
pub struct ResolvedOutput {
	pub rows: RowIter,
	pub schema: SchemaSpec,
}

impl std::fmt::Debug for ResolvedOutput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolvedOutput").field("schema", &self.schema).finish_non_exhaustive()
	}
}

/// Determine the output schema. Explicit outputs carry their own schema
/// text; annotated outputs rely on the schema metadata attached to the
/// entry point at registration time.
#[instrument(name = "engine::resolve_schema", level = "trace", skip(output, entry_point))]
pub(crate) fn resolve_output(
	output: Output,
	entry_point: &EntryPoint,
	routine: &str,
) -> crate::Result<ResolvedOutput> {
	match output {
		Output::Explicit {
			rows,
			schema,
		} => {
			let schema = parse_schema(&schema).map_err(|err| invalid(routine, err))?;
			trace!(routine, columns = schema.len(), "explicit schema resolved");
			Ok(ResolvedOutput {
				rows,
				schema,
			})
		}
		Output::Annotated {
			rows,
		} => {
			let Some(text) = entry_point.schema() else {
				return Err(EngineError::SchemaResolution {
					routine: routine.to_string(),
					reason: SchemaResolutionReason::MissingMetadata,
				});
			};
			let schema = parse_schema(text).map_err(|err| invalid(routine, err))?;
			trace!(routine, columns = schema.len(), "annotated schema resolved");
			Ok(ResolvedOutput {
				rows,
				schema,
			})
		}
	}
}

fn invalid(routine: &str, err: rowgen_tgl::Error) -> EngineError {
	EngineError::SchemaResolution {
		routine: routine.to_string(),
		reason: SchemaResolutionReason::Invalid(err),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::routine::{Argument, ParamType, Row};
	use crate::{BoxedError, EntryPoint, Value};

	fn noop(_args: Vec<Argument>) -> Result<Output, BoxedError> {
		Ok(Output::annotated(Vec::<Row>::new()))
	}

	fn one_row() -> Vec<Row> {
		vec![vec![Value::int4(1), Value::utf8("a")]]
	}

	#[test]
	fn test_explicit_shape() {
		let entry_point = EntryPoint::apply([ParamType::Int4], noop);
		let output = Output::explicit(one_row(), "n int, s string");
		let resolved = resolve_output(output, &entry_point, "f").unwrap();
		assert_eq!(resolved.schema.to_string(), "n int, s string");
		assert_eq!(resolved.rows.collect::<Vec<_>>(), one_row());
	}

	#[test]
	fn test_explicit_shape_ignores_metadata() {
		// schema text travelling with the output wins; the metadata is
		// only for annotated outputs
		let entry_point = EntryPoint::apply([ParamType::Int4], noop).with_schema("x double");
		let output = Output::explicit(one_row(), "n int, s string");
		let resolved = resolve_output(output, &entry_point, "f").unwrap();
		assert_eq!(resolved.schema.to_string(), "n int, s string");
	}

	#[test]
	fn test_annotated_shape() {
		let entry_point = EntryPoint::apply([ParamType::Int4], noop).with_schema("n int, s string");
		let output = Output::annotated(one_row());
		let resolved = resolve_output(output, &entry_point, "f").unwrap();
		assert_eq!(resolved.schema.to_string(), "n int, s string");
		assert_eq!(resolved.rows.collect::<Vec<_>>(), one_row());
	}

	#[test]
	fn test_annotated_shape_without_metadata() {
		let entry_point = EntryPoint::apply([ParamType::Int4], noop);
		let err = resolve_output(Output::annotated(one_row()), &entry_point, "f").unwrap_err();
		assert!(matches!(
			err,
			EngineError::SchemaResolution {
				reason: SchemaResolutionReason::MissingMetadata,
				..
			}
		));
	}

	#[test]
	fn test_explicit_shape_with_unparseable_schema() {
		let entry_point = EntryPoint::apply([ParamType::Int4], noop);
		let err = resolve_output(Output::explicit(one_row(), "n int,"), &entry_point, "f").unwrap_err();
		assert!(matches!(
			err,
			EngineError::SchemaResolution {
				reason: SchemaResolutionReason::Invalid(_),
				..
			}
		));
	}

	#[test]
	fn test_annotated_shape_with_unparseable_metadata() {
		let entry_point = EntryPoint::apply([ParamType::Int4], noop).with_schema("1 2 3");
		let err = resolve_output(Output::annotated(one_row()), &entry_point, "f").unwrap_err();
		assert!(matches!(
			err,
			EngineError::SchemaResolution {
				reason: SchemaResolutionReason::Invalid(_),
				..
			}
		));
	}
}
