use crate::analyzer;
use crate::error::Result;
use crate::model::StringRecord;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, value: &str) -> Result<StringRecord> {
    let properties = analyzer::analyze(value);
    log::debug!(
        "submit: hash={} length={} words={}",
        properties.content_hash,
        properties.length,
        properties.word_count
    );
    store.insert(StringRecord::new(value.to_string(), properties))
}
