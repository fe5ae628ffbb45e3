// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom::bytes::complete::tag;
use nom::{IResult, Parser};
use nom_locate::LocatedSpan;

use crate::tokenize::{Token, TokenKind};

macro_rules! separator {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Separator {  $( $value ),* }

        impl Separator {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Separator::$value => $tag ),*
                }
            }
        }
    };
}

separator! {
    Comma => ","
}

pub(crate) fn parse_separator(input: LocatedSpan<&str>) -> IResult<LocatedSpan<&str>, Token> {
	let (rest, span) = tag(Separator::Comma.as_str()).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Separator(Separator::Comma),
			span: span.into(),
		},
	))
}
