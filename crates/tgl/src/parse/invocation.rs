// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use crate::ast::{Invocation, ParamKind, ParameterToken};
use crate::error::Error;
use crate::parse::Parser;
use crate::tokenize::{Keyword, Literal, Operator, Separator, TokenKind, tokenize};

/// Parse a `GENERATE routine(params…) [SAVE AS table]` command. The whole
/// input must match; trailing text is an error.
pub fn parse_invocation(input: &str) -> crate::Result<Invocation> {
	let tokens = tokenize(input)?;
	let mut parser = Parser::new(tokens);
	let invocation = parser.parse_invocation()?;
	parser.expect_eof()?;
	Ok(invocation)
}

impl Parser {
	pub(crate) fn parse_invocation(&mut self) -> crate::Result<Invocation> {
		self.consume_keyword(Keyword::Generate)?;
		let routine = self.parse_routine_name()?;
		self.consume_operator(Operator::OpenParen)?;
		let params = self.parse_params()?;
		self.consume_operator(Operator::CloseParen)?;

		if !self.is_eof() && self.current()?.is_keyword(Keyword::Save) {
			self.advance()?;
			self.consume_keyword(Keyword::As)?;
			let table = self.consume_identifier()?;
			return Ok(Invocation::Save {
				routine,
				params,
				table: table.value().to_string(),
			});
		}

		Ok(Invocation::Basic {
			routine,
			params,
		})
	}

	// routine_name := identifier ("." identifier)*
	fn parse_routine_name(&mut self) -> crate::Result<String> {
		let mut name = self.consume_identifier()?.value().to_string();
		while !self.is_eof() && self.current()?.is_operator(Operator::Dot) {
			self.advance()?;
			name.push('.');
			name.push_str(self.consume_identifier()?.value());
		}
		Ok(name)
	}

	fn parse_params(&mut self) -> crate::Result<Vec<ParameterToken>> {
		let mut params = Vec::new();
		if self.current()?.is_operator(Operator::CloseParen) {
			return Ok(params);
		}
		loop {
			params.push(self.parse_param()?);
			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}
		Ok(params)
	}

	fn parse_param(&mut self) -> crate::Result<ParameterToken> {
		let token = self.current()?;
		let kind = match token.kind {
			TokenKind::Literal(Literal::Text) => ParamKind::Text,
			TokenKind::Literal(Literal::Float) => ParamKind::Float,
			TokenKind::Literal(Literal::Integer) => ParamKind::Integer,
			TokenKind::Identifier => ParamKind::Identifier,
			_ => return Err(Error::unexpected("parameter", token)),
		};
		let token = self.advance()?;
		Ok(ParameterToken::new(token.value(), kind))
	}
}
