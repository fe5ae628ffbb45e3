// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

use crate::tokenize::{Token, TokenKind};

macro_rules! operator {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {  $( $value ),* }

        impl Operator {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Operator::$value => $tag ),*
                }
            }
        }
    };
}

operator! {
    OpenParen  => "(",
    CloseParen => ")",
    Dot        => "."
}

pub(crate) fn parse_operator(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	alt((parse_open_paren, parse_close_paren, parse_dot)).parse(input)
}

fn operator_token<'a>(
	input: LocatedSpan<&'a str>,
	operator: Operator,
) -> IResult<LocatedSpan<&'a str>, Token> {
	let (rest, span) = tag(operator.as_str()).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Operator(operator),
			span: span.into(),
		},
	))
}

fn parse_open_paren(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	operator_token(input, Operator::OpenParen)
}

fn parse_close_paren(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	operator_token(input, Operator::CloseParen)
}

fn parse_dot(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	operator_token(input, Operator::Dot)
}
