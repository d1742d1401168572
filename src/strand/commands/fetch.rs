use crate::error::{Result, StrandError};
use crate::model::StringRecord;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, value: &str) -> Result<StringRecord> {
    store
        .find_by_value(value)?
        .ok_or_else(|| StrandError::NotFound(value.to_string()))
}
