use super::{sort_newest_first, RecordStore};
use crate::analyzer;
use crate::error::{Result, StrandError};
use crate::filter::RecordFilter;
use crate::model::StringRecord;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, StringRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&self, record: StringRecord) -> Result<StringRecord> {
        // The lock spans the whole check-then-insert, so two concurrent
        // inserts of the same value cannot both pass the vacancy check.
        let mut records = self.records.lock().expect("record store lock poisoned");
        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StrandError::Conflict(record.value)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    fn find_by_value(&self, value: &str) -> Result<Option<StringRecord>> {
        let records = self.records.lock().expect("record store lock poisoned");
        Ok(records.get(&analyzer::content_hash(value)).cloned())
    }

    fn delete_by_value(&self, value: &str) -> Result<bool> {
        let mut records = self.records.lock().expect("record store lock poisoned");
        Ok(records.remove(&analyzer::content_hash(value)).is_some())
    }

    fn query(&self, filter: &RecordFilter) -> Result<Vec<StringRecord>> {
        let records = self.records.lock().expect("record store lock poisoned");
        let mut matches: Vec<StringRecord> = records
            .values()
            .filter(|record| filter.matches(&record.properties))
            .cloned()
            .collect();
        drop(records);
        sort_newest_first(&mut matches);
        Ok(matches)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn record(value: &str) -> StringRecord {
        StringRecord::new(value.to_string(), analyzer::analyze(value))
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_values(self, values: &[&str]) -> Self {
            for value in values {
                self.store.insert(record(value)).unwrap();
            }
            self
        }
    }
}
