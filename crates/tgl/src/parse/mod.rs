// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

pub use invocation::parse_invocation;
pub use schema::parse_schema;

mod invocation;
mod schema;

use crate::error::Error;
use crate::tokenize::{Keyword, Operator, Token, TokenKind};

pub(crate) struct Parser {
	tokens: Vec<Token>,
	position: usize,
}

impl Parser {
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			position: 0,
		}
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	pub(crate) fn advance(&mut self) -> crate::Result<Token> {
		if self.is_eof() {
			return Err(Error::UnexpectedEof);
		}
		let token = self.tokens[self.position].clone();
		self.position += 1;
		Ok(token)
	}

	pub(crate) fn current(&self) -> crate::Result<&Token> {
		self.tokens.get(self.position).ok_or(Error::UnexpectedEof)
	}

	pub(crate) fn consume_if(&mut self, expected: TokenKind) -> crate::Result<Option<Token>> {
		if self.is_eof() || self.current()?.kind != expected {
			return Ok(None);
		}
		Ok(Some(self.advance()?))
	}

	pub(crate) fn consume_keyword(&mut self, expected: Keyword) -> crate::Result<Token> {
		let got = self.current()?;
		if !got.is_keyword(expected) {
			return Err(Error::unexpected(format!("keyword {}", expected.as_str()), got));
		}
		self.advance()
	}

	pub(crate) fn consume_operator(&mut self, expected: Operator) -> crate::Result<Token> {
		let got = self.current()?;
		if !got.is_operator(expected) {
			return Err(Error::unexpected(format!("'{}'", expected.as_str()), got));
		}
		self.advance()
	}

	pub(crate) fn consume_identifier(&mut self) -> crate::Result<Token> {
		let got = self.current()?;
		if !got.is_identifier() {
			return Err(Error::unexpected("identifier", got));
		}
		self.advance()
	}

	/// The whole token stream must be consumed; anything left over is an
	/// error, not a silent truncation.
	pub(crate) fn expect_eof(&self) -> crate::Result<()> {
		match self.current() {
			Err(_) => Ok(()),
			Ok(token) => Err(Error::TrailingInput {
				fragment: token.span.fragment.clone(),
				line: token.span.line,
				column: token.span.column,
			}),
		}
	}
}
