// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::{char, digit1};
use nom::combinator::recognize;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

use crate::tokenize::{Literal, Token, TokenKind};

pub(crate) fn parse_literal(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	alt((parse_text, parse_float, parse_integer)).parse(input)
}

// The fragment keeps its surrounding quote characters; stripping them is a
// coercion-time concern, not a tokenize-time concern.
fn parse_text(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	let (rest, span) = alt((
		recognize(delimited(char('\''), take_till(|c| c == '\''), char('\''))),
		recognize(delimited(char('"'), take_till(|c| c == '"'), char('"'))),
	))
	.parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Literal(Literal::Text),
			span: span.into(),
		},
	))
}

fn parse_float(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	let (rest, span) = recognize((digit1, char('.'), digit1)).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Literal(Literal::Float),
			span: span.into(),
		},
	))
}

fn parse_integer(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	let (rest, span) = digit1(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Literal(Literal::Integer),
			span: span.into(),
		},
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integer() {
		let (_rest, token) = parse_literal(LocatedSpan::new("42")).unwrap();
		assert_eq!(token.kind, TokenKind::Literal(Literal::Integer));
		assert_eq!(token.span.fragment, "42");
	}

	#[test]
	fn test_float() {
		let (_rest, token) = parse_literal(LocatedSpan::new("3.14")).unwrap();
		assert_eq!(token.kind, TokenKind::Literal(Literal::Float));
		assert_eq!(token.span.fragment, "3.14");
	}

	#[test]
	fn test_integer_then_dot() {
		// `1.` without a fractional part is an integer followed by a dot
		let (rest, token) = parse_literal(LocatedSpan::new("1.")).unwrap();
		assert_eq!(token.kind, TokenKind::Literal(Literal::Integer));
		assert_eq!(*rest.fragment(), ".");
	}

	#[test]
	fn test_single_quoted_text() {
		let (_rest, token) = parse_literal(LocatedSpan::new("'abc'")).unwrap();
		assert_eq!(token.kind, TokenKind::Literal(Literal::Text));
		assert_eq!(token.span.fragment, "'abc'");
	}

	#[test]
	fn test_double_quoted_text() {
		let (_rest, token) = parse_literal(LocatedSpan::new("\"abc\"")).unwrap();
		assert_eq!(token.span.fragment, "\"abc\"");
	}

	#[test]
	fn test_empty_text() {
		let (_rest, token) = parse_literal(LocatedSpan::new("''")).unwrap();
		assert_eq!(token.span.fragment, "''");
	}

	#[test]
	fn test_unterminated_text() {
		assert!(parse_literal(LocatedSpan::new("'abc")).is_err());
	}
}
