// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::branch::alt;
use nom::character::complete::multispace0;
use nom::combinator::{all_consuming, complete};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

pub use keyword::Keyword;
pub use operator::Operator;
pub use separator::Separator;
pub use span::Span;

use crate::error::Error;
use crate::tokenize::identifier::parse_identifier;
use crate::tokenize::keyword::parse_keyword;
use crate::tokenize::literal::parse_literal;
use crate::tokenize::operator::parse_operator;
use crate::tokenize::separator::parse_separator;

mod identifier;
mod keyword;
mod literal;
mod operator;
mod separator;
mod span;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
}

impl Token {
	pub fn is_identifier(&self) -> bool {
		self.kind == TokenKind::Identifier
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}

	pub fn is_literal(&self, literal: Literal) -> bool {
		self.kind == TokenKind::Literal(literal)
	}

	pub fn is_operator(&self, operator: Operator) -> bool {
		self.kind == TokenKind::Operator(operator)
	}

	pub fn is_separator(&self, separator: Separator) -> bool {
		self.kind == TokenKind::Separator(separator)
	}

	pub fn value(&self) -> &str {
		self.span.fragment.as_str()
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
	Keyword(Keyword),
	Identifier,
	Literal(Literal),
	Operator(Operator),
	Separator(Separator),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Literal {
	Integer,
	Float,
	Text,
}

/// Tokenize the whole input. Input that cannot be consumed completely is an
/// error carrying the offending remainder and its position.
pub fn tokenize(input: &str) -> crate::Result<Vec<Token>> {
	match all_consuming(terminated(many0(token), multispace0)).parse(LocatedSpan::new(input)) {
		Ok((_, tokens)) => Ok(tokens),
		Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => Err(Error::Lex {
			fragment: err.input.fragment().to_string(),
			line: err.input.location_line(),
			column: err.input.get_column() as u32,
		}),
		Err(nom::Err::Incomplete(_)) => Err(Error::Lex {
			fragment: input.to_string(),
			line: 1,
			column: 1,
		}),
	}
}

fn token(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	complete(preceded(
		multispace0,
		alt((parse_keyword, parse_literal, parse_identifier, parse_operator, parse_separator)),
	))
	.parse(input)
}
