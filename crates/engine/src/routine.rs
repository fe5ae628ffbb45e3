// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rowgen_type::Value;

use crate::BoxedError;
use crate::context::ExecutionContext;

/// One produced row: an ordered sequence of column values whose arity must
/// equal the resolved schema's length.
pub type Row = Vec<Value>;

/// A possibly lazy row collection. The engine pulls it exactly once, at the
/// materialization boundary.
pub type RowIter = Box<dyn Iterator<Item = Row> + Send>;

/// The declared type of one routine parameter, decided at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
	/// The execution context handle; legal only as the first parameter.
	Context,
	/// A reference to a table resolved through the execution context.
	TableRef,
	Int4,
	Int8,
	Float4,
	Float8,
	Utf8,
}

impl Display for ParamType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let label = match self {
			ParamType::Context => "context",
			ParamType::TableRef => "table",
			ParamType::Int4 => "int4",
			ParamType::Int8 => "int8",
			ParamType::Float4 => "float4",
			ParamType::Float8 => "float8",
			ParamType::Utf8 => "utf8",
		};
		f.write_str(label)
	}
}

/// A coerced call argument handed to a routine.
pub enum Argument {
	Context(Arc<dyn ExecutionContext>),
	Table(RowIter),
	Value(Value),
}

impl Argument {
	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Argument::Value(value) => Some(value),
			_ => None,
		}
	}

	pub fn into_value(self) -> Option<Value> {
		match self {
			Argument::Value(value) => Some(value),
			_ => None,
		}
	}
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Argument::Context(_) => f.write_str("Context"),
			Argument::Table(_) => f.write_str("Table"),
			Argument::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}

/// What a routine returns. The shape is tagged by the producer: an explicit
/// output carries its own schema text, an annotated output relies on schema
/// metadata attached to the entry point at registration time.
///
/// The row collection stays opaque (and possibly lazy) until the
/// materializer forces it.
pub enum Output {
	Explicit {
		rows: RowIter,
		schema: String,
	},
	Annotated {
		rows: RowIter,
	},
}

impl Output {
	pub fn explicit<I>(rows: I, schema: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = Row>,
		I::IntoIter: Send + 'static,
	{
		Output::Explicit {
			rows: Box::new(rows.into_iter()),
			schema: schema.into(),
		}
	}

	pub fn annotated<I>(rows: I) -> Self
	where
		I: IntoIterator<Item = Row>,
		I::IntoIter: Send + 'static,
	{
		Output::Annotated {
			rows: Box::new(rows.into_iter()),
		}
	}
}

impl fmt::Debug for Output {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Output::Explicit {
				schema,
				..
			} => f.debug_struct("Explicit").field("schema", schema).finish_non_exhaustive(),
			Output::Annotated {
				..
			} => f.debug_struct("Annotated").finish_non_exhaustive(),
		}
	}
}

/// A table-generating routine. Failures surface as the routine's own error
/// and are wrapped by the dispatcher; the output shape is not validated
/// here, that is the schema resolver's job.
pub trait Routine: Send + Sync {
	fn apply(&self, args: Vec<Argument>) -> Result<Output, BoxedError>;
}

impl<F> Routine for F
where
	F: Fn(Vec<Argument>) -> Result<Output, BoxedError> + Send + Sync,
{
	fn apply(&self, args: Vec<Argument>) -> Result<Output, BoxedError> {
		self(args)
	}
}
