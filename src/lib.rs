//! Purpose: Shared core library crate used by the `client-cli` binary and tests.
//! Exports: `core` (record model, store, query engine, errors) and re-exports of its main types.
//! Role: Library backing the binary; keeps loading and querying free of terminal concerns.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
//! Invariants: Only `core::store` touches the filesystem, and only to read.
pub mod core;
mod json;

pub use crate::core::error::{Error, ErrorKind, Result, to_exit_code};
pub use crate::core::query::{DuplicateGroup, QueryEngine};
pub use crate::core::record::{Dataset, REQUIRED_FIELDS, Record};
pub use crate::core::store::load;
