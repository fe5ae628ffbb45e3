// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All data types a generated column can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// A date value (year, month, day)
	Date,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
}

impl Type {
	/// Look up a type by its schema-spec name. Names are matched
	/// case-insensitively; anything outside the fixed set yields `None`.
	pub fn from_schema_name(name: &str) -> Option<Type> {
		let name = name.to_ascii_lowercase();
		match name.as_str() {
			"boolean" => Some(Type::Bool),
			"tinyint" => Some(Type::Int1),
			"smallint" => Some(Type::Int2),
			"int" => Some(Type::Int4),
			"bigint" => Some(Type::Int8),
			"float" => Some(Type::Float4),
			"double" => Some(Type::Float8),
			"string" => Some(Type::Utf8),
			"timestamp" => Some(Type::DateTime),
			"date" => Some(Type::Date),
			_ => None,
		}
	}

	pub fn schema_name(&self) -> &'static str {
		match self {
			Type::Bool => "boolean",
			Type::Int1 => "tinyint",
			Type::Int2 => "smallint",
			Type::Int4 => "int",
			Type::Int8 => "bigint",
			Type::Float4 => "float",
			Type::Float8 => "double",
			Type::Utf8 => "string",
			Type::DateTime => "timestamp",
			Type::Date => "date",
		}
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Bool)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::DateTime)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.schema_name())
	}
}
