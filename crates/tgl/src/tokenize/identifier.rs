// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::bytes::complete::take_while1;
use nom::bytes::complete::take_while;
use nom::combinator::{complete, recognize};
use nom::sequence::pair;
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

use crate::tokenize::{Token, TokenKind};

pub(crate) fn parse_identifier(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	let (rest, span) =
		complete(recognize(pair(take_while1(is_identifier_start), take_while(is_identifier_char)))).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Identifier,
			span: span.into(),
		},
	))
}

fn is_identifier_start(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}
