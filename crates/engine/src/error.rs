// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use crate::BoxedError;
use crate::routine::ParamType;

/// Every way an invocation can fail. All variants are terminal; there is no
/// retry and a failing stage aborts the whole call.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	#[error(transparent)]
	Parse(#[from] rowgen_tgl::Error),

	#[error("unknown routine: {name}")]
	UnknownRoutine {
		name: String,
	},

	#[error("routine '{routine}' has no '{entry_point}' entry point")]
	MissingEntryPoint {
		routine: String,
		entry_point: &'static str,
	},

	#[error("routine '{routine}' has {count} '{entry_point}' entry points, resolution is ambiguous")]
	AmbiguousEntryPoint {
		routine: String,
		entry_point: &'static str,
		count: usize,
	},

	#[error("routine '{routine}' expects {expected} arguments, got {actual}")]
	ArityMismatch {
		routine: String,
		expected: usize,
		actual: usize,
	},

	#[error("parameter {token:?} of routine '{routine}' is not a valid {target}")]
	NumericParameter {
		routine: String,
		token: String,
		target: ParamType,
	},

	#[error("no coercion from {token:?} to the {target} parameter of routine '{routine}'")]
	UnsupportedParameterType {
		routine: String,
		target: ParamType,
		token: String,
	},

	#[error("unknown table: {name}")]
	UnknownTable {
		name: String,
		#[source]
		source: BoxedError,
	},

	#[error("routine '{routine}' failed")]
	RoutineFailed {
		routine: String,
		#[source]
		source: BoxedError,
	},

	#[error("cannot resolve the output schema of routine '{routine}'")]
	SchemaResolution {
		routine: String,
		#[source]
		reason: SchemaResolutionReason,
	},

	#[error("unknown column type: {type_name}")]
	UnknownColumnType {
		type_name: String,
	},

	#[error("routine '{routine}' produced a row of arity {actual}, schema expects {expected}")]
	RowArityMismatch {
		routine: String,
		expected: usize,
		actual: usize,
	},

	#[error("cannot persist table '{table}'")]
	Persist {
		table: String,
		#[source]
		source: BoxedError,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaResolutionReason {
	#[error("no schema metadata attached to the entry point")]
	MissingMetadata,

	#[error("schema text does not parse")]
	Invalid(#[source] rowgen_tgl::Error),
}
