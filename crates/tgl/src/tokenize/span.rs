// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use nom_locate::LocatedSpan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
	/// Byte offset of the fragment relative to the parser input, starting
	/// at 0.
	pub offset: usize,
	/// Line number, starting at 1.
	pub line: u32,
	/// Column number, starting at 1.
	pub column: u32,
	pub fragment: String,
}

impl<'a> From<LocatedSpan<&'a str>> for Span {
	fn from(value: LocatedSpan<&'a str>) -> Self {
		Self {
			offset: value.location_offset(),
			line: value.location_line(),
			column: value.get_column() as u32,
			fragment: value.fragment().to_string(),
		}
	}
}
