// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use crate::ast::{SchemaColumn, SchemaSpec};
use crate::parse::Parser;
use crate::tokenize::{Separator, TokenKind, tokenize};

/// Parse a schema spec such as `"a int, b string"`. An all-whitespace input
/// is the empty schema; anything else must match completely.
pub fn parse_schema(input: &str) -> crate::Result<SchemaSpec> {
	let tokens = tokenize(input)?;
	if tokens.is_empty() {
		return Ok(SchemaSpec::default());
	}
	let mut parser = Parser::new(tokens);
	let spec = parser.parse_schema()?;
	parser.expect_eof()?;
	Ok(spec)
}

impl Parser {
	// schema := name_type ("," name_type)*
	// name_type := identifier identifier
	pub(crate) fn parse_schema(&mut self) -> crate::Result<SchemaSpec> {
		let mut columns = Vec::new();
		loop {
			let name = self.consume_identifier()?;
			let type_name = self.consume_identifier()?;
			columns.push(SchemaColumn::new(name.value(), type_name.value()));
			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}
		Ok(SchemaSpec::new(columns))
	}
}
