//! # Storage Layer
//!
//! This module defines the persistence abstraction for strand. The
//! [`RecordStore`] trait covers the four primitives the engine needs:
//! insert-if-absent, exact lookup, delete, and a filtered ordered scan.
//!
//! ## Content addressing
//!
//! Records are keyed by their content hash, and the hash is a pure function
//! of the value, so the hash-uniqueness check and the value-uniqueness check
//! collapse into one admission decision. Implementations must make that
//! decision atomic: of two concurrent inserts of the same value, exactly one
//! succeeds and the other observes a conflict.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage, one JSON document per
//!   record named by its hash.
//! - [`memory::InMemoryStore`]: in-memory storage for tests; no persistence.

use crate::error::Result;
use crate::filter::RecordFilter;
use crate::model::StringRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
///
/// Methods take `&self`; implementations carry their own interior locking so
/// one long-lived store can be shared read/write across request threads.
pub trait RecordStore: Send + Sync {
    /// Insert a record keyed by its content hash. The duplicate check and
    /// the insert form a single atomic admission; inserting a value that is
    /// already present fails with `Conflict`.
    fn insert(&self, record: StringRecord) -> Result<StringRecord>;

    /// Exact-match lookup by raw value.
    fn find_by_value(&self, value: &str) -> Result<Option<StringRecord>>;

    /// Remove the record with this exact value. Returns whether one existed.
    fn delete_by_value(&self, value: &str) -> Result<bool>;

    /// Every record satisfying the filter, materialized and ordered newest
    /// first. Reads a point-in-time snapshot; never blocks writers.
    fn query(&self, filter: &RecordFilter) -> Result<Vec<StringRecord>>;
}

// Creation timestamps can tie; the id tiebreak keeps repeat queries stable.
pub(crate) fn sort_newest_first(records: &mut [StringRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
