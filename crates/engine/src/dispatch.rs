// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use std::sync::Arc;

use tracing::{debug, instrument};

use rowgen_tgl::ParameterToken;
use rowgen_type::Value;

use crate::context::ExecutionContext;
use crate::error::EngineError;
use crate::registry::EntryPoint;
use crate::routine::{Argument, Output, ParamType};

/// Invoke a resolved entry point: inject the execution context when the
/// signature declares it first, check arity, coerce every token against its
/// declared parameter type and perform the call.
#[instrument(name = "engine::invoke", level = "debug", skip(entry_point, ctx, params))]
pub(crate) fn invoke(
	entry_point: &EntryPoint,
	ctx: &Arc<dyn ExecutionContext>,
	routine: &str,
	params: &[ParameterToken],
) -> crate::Result<Output> {
	let declared = entry_point.signature().params();
	let injected = entry_point.signature().expects_context();

	// Context injection happens before the arity check: the effective
	// parameter list is [context] ++ params when the signature leads with
	// the context type.
	let effective = params.len() + usize::from(injected);
	if effective != declared.len() {
		return Err(EngineError::ArityMismatch {
			routine: routine.to_string(),
			expected: declared.len(),
			actual: effective,
		});
	}

	let mut args = Vec::with_capacity(declared.len());
	if injected {
		args.push(Argument::Context(Arc::clone(ctx)));
	}
	for (token, target) in params.iter().zip(&declared[usize::from(injected)..]) {
		args.push(coerce(ctx, routine, token, *target)?);
	}

	debug!(routine, arity = args.len(), "invoking routine");
	entry_point.routine().apply(args).map_err(|source| EngineError::RoutineFailed {
		routine: routine.to_string(),
		source,
	})
}

// The fixed coercion rule table. The declared type decides the rule; the
// token's syntactic kind never does.
fn coerce(
	ctx: &Arc<dyn ExecutionContext>,
	routine: &str,
	token: &ParameterToken,
	target: ParamType,
) -> crate::Result<Argument> {
	let text = token.text();
	match target {
		// No token coerces to a context handle; the context is only ever
		// injected for a leading context parameter.
		ParamType::Context => Err(EngineError::UnsupportedParameterType {
			routine: routine.to_string(),
			target,
			token: text.to_string(),
		}),
		ParamType::TableRef => {
			ctx.resolve_table(text).map(Argument::Table).map_err(|source| EngineError::UnknownTable {
				name: text.to_string(),
				source,
			})
		}
		ParamType::Int4 => text
			.parse::<i32>()
			.map(|v| Argument::Value(Value::Int4(v)))
			.map_err(|_| numeric_error(routine, text, target)),
		ParamType::Int8 => text
			.parse::<i64>()
			.map(|v| Argument::Value(Value::Int8(v)))
			.map_err(|_| numeric_error(routine, text, target)),
		ParamType::Float4 => text
			.parse::<f32>()
			.map(|v| Argument::Value(Value::float4(v)))
			.map_err(|_| numeric_error(routine, text, target)),
		ParamType::Float8 => text
			.parse::<f64>()
			.map(|v| Argument::Value(Value::float8(v)))
			.map_err(|_| numeric_error(routine, text, target)),
		ParamType::Utf8 => Ok(Argument::Value(Value::Utf8(strip_quotes(text)))),
	}
}

fn numeric_error(routine: &str, token: &str, target: ParamType) -> EngineError {
	EngineError::NumericParameter {
		routine: routine.to_string(),
		token: token.to_string(),
		target,
	}
}

// Strip exactly one matching pair of surrounding quote characters, if both
// ends carry one; anything else passes through unchanged.
fn strip_quotes(text: &str) -> String {
	let bytes = text.as_bytes();
	if bytes.len() >= 2 {
		let first = bytes[0];
		let last = bytes[bytes.len() - 1];
		if (first == b'\'' || first == b'"') && first == last {
			return text[1..text.len() - 1].to_string();
		}
	}
	text.to_string()
}
