use crate::commands::ListOutcome;
use crate::error::Result;
use crate::filter::RawFilter;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, raw: &RawFilter) -> Result<ListOutcome> {
    // Validation happens before the store is touched
    let filter = raw.parse()?;
    let records = store.query(&filter)?;
    log::debug!("list: filter={filter:?} matched={}", records.len());
    Ok(ListOutcome {
        count: records.len(),
        filter,
        records,
    })
}
