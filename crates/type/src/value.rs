// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Date, DateTime, OrderedF32, OrderedF64, Type};

/// A single column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Bool(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date value (year, month, day)
	Date(Date),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Bool(v.into())
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn date(v: Date) -> Self {
		Value::Date(v)
	}

	pub fn datetime(v: DateTime) -> Self {
		Value::DateTime(v)
	}

	/// The type of this value; `Undefined` carries none.
	pub fn ty(&self) -> Option<Type> {
		match self {
			Value::Undefined => None,
			Value::Bool(_) => Some(Type::Bool),
			Value::Int1(_) => Some(Type::Int1),
			Value::Int2(_) => Some(Type::Int2),
			Value::Int4(_) => Some(Type::Int4),
			Value::Int8(_) => Some(Type::Int8),
			Value::Float4(_) => Some(Type::Float4),
			Value::Float8(_) => Some(Type::Float8),
			Value::Utf8(_) => Some(Type::Utf8),
			Value::Date(_) => Some(Type::Date),
			Value::DateTime(_) => Some(Type::DateTime),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Bool(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
			Value::Date(v) => Display::fmt(v, f),
			Value::DateTime(v) => Display::fmt(v, f),
		}
	}
}
