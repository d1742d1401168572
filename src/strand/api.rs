//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for all strand operations, regardless of the transport in
//! front of it.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Extracts and validates inputs** at the request boundary (missing or
//!   mistyped payload fields are rejected here, before any store access)
//! - **Returns structured types**, never formatted output
//!
//! ## Generic Over RecordStore
//!
//! `StrandApi<S: RecordStore>` is generic over the storage backend:
//! production wires `FileStore`, tests wire `InMemoryStore`. The store is
//! injected at construction — built once at process start, long-lived, and
//! shared by every concurrent caller. There is no implicit global handle.

use crate::commands;
use crate::error::{Result, StrandError};
use crate::filter::RawFilter;
use crate::model::StringRecord;
use crate::store::RecordStore;

pub use crate::commands::{ListOutcome, TextQueryOutcome};

/// The main API facade for strand operations.
pub struct StrandApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> StrandApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Analyze a value taken from a raw request payload and store the
    /// record. Fails with `MissingField` when the payload has no `value`
    /// key and `InvalidType` when the key is not a string.
    pub fn submit_value(&self, payload: &serde_json::Value) -> Result<StringRecord> {
        let field = payload
            .get("value")
            .ok_or(StrandError::MissingField("value"))?;
        let value = field.as_str().ok_or(StrandError::InvalidType("value"))?;
        commands::submit::run(&self.store, value)
    }

    /// Typed entry point for callers that already hold a string.
    pub fn submit(&self, value: &str) -> Result<StringRecord> {
        commands::submit::run(&self.store, value)
    }

    /// Exact-match lookup by raw value.
    pub fn fetch(&self, value: &str) -> Result<StringRecord> {
        commands::fetch::run(&self.store, value)
    }

    /// Query with a structured filter; the outcome echoes the filter that
    /// was applied.
    pub fn list(&self, raw: &RawFilter) -> Result<ListOutcome> {
        commands::list::run(&self.store, raw)
    }

    /// Query with natural-language text. Blank text is `MissingField`: the
    /// query input is effectively absent.
    pub fn list_by_text(&self, text: &str) -> Result<TextQueryOutcome> {
        if text.trim().is_empty() {
            return Err(StrandError::MissingField("query"));
        }
        commands::query_text::run(&self.store, text)
    }

    /// Delete the record for an exact value.
    pub fn remove(&self, value: &str) -> Result<()> {
        commands::remove::run(&self.store, value)
    }
}
