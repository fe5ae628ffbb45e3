// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

use crate::BoxedError;
use crate::routine::RowIter;

/// The handle a routine uses to reach engine-level operations. Supplied by
/// the embedding engine; rowgen only consumes it for table lookups and for
/// context injection into routines that declare a context parameter.
pub trait ExecutionContext: Send + Sync {
	fn resolve_table(&self, name: &str) -> Result<RowIter, BoxedError>;
}
