// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use rowgen_type::Value;

use crate::BoxedError;
use crate::registry::{Container, EntryPoint};
use crate::routine::{Argument, Output, ParamType, Routine};

/// The bundled `generate_series(start, end)` routine: one `value` column
/// holding every integer of the inclusive range. An empty range yields no
/// rows.
pub struct GenerateSeries;

impl Routine for GenerateSeries {
	fn apply(&self, args: Vec<Argument>) -> Result<Output, BoxedError> {
		let [Argument::Value(Value::Int4(start)), Argument::Value(Value::Int4(end))] = args.as_slice()
		else {
			return Err("generate_series requires two int4 parameters: start and end".into());
		};

		let rows: Vec<Vec<Value>> = (*start..=*end).map(|v| vec![Value::Int4(v)]).collect();
		Ok(Output::annotated(rows))
	}
}

pub(crate) fn container() -> Container {
	Container::new("generate_series")
		.with_entry_point(EntryPoint::apply([ParamType::Int4, ParamType::Int4], GenerateSeries).with_schema("value int"))
}
