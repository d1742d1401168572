use crate::error::{Result, StrandError};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, value: &str) -> Result<()> {
    if !store.delete_by_value(value)? {
        return Err(StrandError::NotFound(value.to_string()));
    }
    log::debug!("removed record for value ({} bytes)", value.len());
    Ok(())
}
