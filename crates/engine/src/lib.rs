// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Rowgen

pub use context::ExecutionContext;
pub use engine::{Engine, EngineBuilder};
pub use error::{EngineError, SchemaResolutionReason};
pub use materialize::{ColumnDescriptor, MaterializationResult, QueryResult};
pub use registry::{Container, ENTRY_POINT, EntryPoint, RoutineRegistry, Signature};
pub use routine::{Argument, Output, ParamType, Routine, Row, RowIter};
pub use schema::ResolvedOutput;
pub use series::GenerateSeries;
pub use storage::{MemoryStorage, Storage, StoredTable};

pub use rowgen_type::{Type, Value};

mod context;
mod dispatch;
mod engine;
mod error;
mod materialize;
mod registry;
mod routine;
mod schema;
mod series;
mod storage;

/// The error type routines and collaborators surface their own failures
/// with; the engine wraps it into the matching [`EngineError`] variant.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, EngineError>;
