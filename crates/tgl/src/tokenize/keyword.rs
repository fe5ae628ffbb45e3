// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::satisfy;
use nom::combinator::{not, peek};
use nom::sequence::terminated;
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

use crate::tokenize::{Token, TokenKind};

macro_rules! keyword {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {  $( $value ),* }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Keyword::$value => $tag ),*
                }
            }
        }
    };
}

keyword! {
    Generate => "GENERATE",
    Save     => "SAVE",
    As       => "AS"
}

fn is_identifier_continue(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

pub(crate) fn parse_keyword(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	alt((parse_generate, parse_save, parse_as)).parse(input)
}

// A keyword only matches when not followed by an identifier character, so
// that identifiers like `generated` stay identifiers.
fn keyword_token<'a>(
	input: LocatedSpan<&'a str>,
	keyword: Keyword,
) -> IResult<LocatedSpan<&'a str>, Token> {
	let (rest, span) =
		terminated(tag_no_case(keyword.as_str()), not(peek(satisfy(is_identifier_continue)))).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Keyword(keyword),
			span: span.into(),
		},
	))
}

fn parse_generate(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	keyword_token(input, Keyword::Generate)
}

fn parse_save(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	keyword_token(input, Keyword::Save)
}

fn parse_as(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	keyword_token(input, Keyword::As)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_keywords() {
		for (input, keyword) in [("GENERATE", Keyword::Generate), ("save", Keyword::Save), ("As", Keyword::As)] {
			let (_rest, token) = parse_keyword(LocatedSpan::new(input)).unwrap();
			assert_eq!(token.kind, TokenKind::Keyword(keyword));
			assert_eq!(token.span.fragment, input);
		}
	}

	#[test]
	fn test_identifier_continuation_rejected() {
		assert!(parse_keyword(LocatedSpan::new("saved")).is_err());
		assert!(parse_keyword(LocatedSpan::new("as_of")).is_err());
		assert!(parse_keyword(LocatedSpan::new("generate9")).is_err());
	}

	#[test]
	fn test_followed_by_paren() {
		let (rest, token) = parse_keyword(LocatedSpan::new("as(")).unwrap();
		assert_eq!(token.kind, TokenKind::Keyword(Keyword::As));
		assert_eq!(*rest.fragment(), "(");
	}
}
