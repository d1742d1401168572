//! Business logic for each operation, one module per command.
//!
//! Command functions are pure with respect to I/O: they take a store and
//! plain Rust arguments, return plain Rust types, and never touch stdout or
//! a transport. All input validation happens before any store mutation.

use crate::filter::RecordFilter;
use crate::model::StringRecord;
use serde::Serialize;

pub mod fetch;
pub mod list;
pub mod query_text;
pub mod remove;
pub mod submit;

/// Result of a structured list call: the matches plus the filter that was
/// actually applied, echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutcome {
    pub count: usize,
    pub filter: RecordFilter,
    pub records: Vec<StringRecord>,
}

/// Result of a natural-language query: as [`ListOutcome`], plus the original
/// text and the filter parsed out of it.
#[derive(Debug, Clone, Serialize)]
pub struct TextQueryOutcome {
    pub count: usize,
    pub query: String,
    pub filter: RecordFilter,
    pub records: Vec<StringRecord>,
}
