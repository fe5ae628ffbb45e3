// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

pub use ast::{Invocation, ParamKind, ParameterToken, SchemaColumn, SchemaSpec};
pub use error::Error;
pub use parse::{parse_invocation, parse_schema};

pub mod ast;
mod error;
pub mod parse;
pub mod tokenize;

pub type Result<T> = std::result::Result<T, Error>;
