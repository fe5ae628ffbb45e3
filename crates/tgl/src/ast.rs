// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A parsed `GENERATE` command. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invocation {
	/// `GENERATE routine(params)` — the result is returned to the caller.
	Basic {
		routine: String,
		params: Vec<ParameterToken>,
	},
	/// `GENERATE routine(params) SAVE AS table` — the result is persisted.
	Save {
		routine: String,
		params: Vec<ParameterToken>,
		table: String,
	},
}

impl Invocation {
	pub fn routine(&self) -> &str {
		match self {
			Invocation::Basic {
				routine,
				..
			} => routine,
			Invocation::Save {
				routine,
				..
			} => routine,
		}
	}

	pub fn params(&self) -> &[ParameterToken] {
		match self {
			Invocation::Basic {
				params,
				..
			} => params,
			Invocation::Save {
				params,
				..
			} => params,
		}
	}

	/// The destination table of a save invocation.
	pub fn destination(&self) -> Option<&str> {
		match self {
			Invocation::Basic {
				..
			} => None,
			Invocation::Save {
				table,
				..
			} => Some(table),
		}
	}
}

/// A raw parameter as written in the invocation text. The kind only
/// disambiguates parsing; the semantic type is re-derived at coercion time
/// from the target parameter's declared type. Text parameters keep their
/// surrounding quote characters until coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterToken {
	text: String,
	kind: ParamKind,
}

impl ParameterToken {
	pub fn new(text: impl Into<String>, kind: ParamKind) -> Self {
		Self {
			text: text.into(),
			kind,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn kind(&self) -> ParamKind {
		self.kind
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
	Text,
	Float,
	Integer,
	Identifier,
}

/// An ordered list of `(column name, type name)` pairs describing a row
/// shape. Order is significant and must match row field order. Immutable
/// once resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSpec {
	columns: Vec<SchemaColumn>,
}

impl SchemaSpec {
	pub fn new(columns: Vec<SchemaColumn>) -> Self {
		Self {
			columns,
		}
	}

	pub fn columns(&self) -> &[SchemaColumn] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

impl Display for SchemaSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut first = true;
		for column in &self.columns {
			if !first {
				f.write_str(", ")?;
			}
			first = false;
			Display::fmt(column, f)?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
	name: String,
	type_name: String,
}

impl SchemaColumn {
	pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn type_name(&self) -> &str {
		&self.type_name
	}
}

impl Display for SchemaColumn {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.name, self.type_name)
	}
}
