use super::{sort_newest_first, RecordStore};
use crate::analyzer;
use crate::error::{Result, StrandError};
use crate::filter::RecordFilter;
use crate::model::StringRecord;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const RECORD_PREFIX: &str = "rec-";
const RECORD_EXT: &str = ".json";

/// File-backed storage: one `rec-<hash>.json` document per record.
///
/// The content hash in the filename carries the uniqueness constraint:
/// `create_new` refuses to open an existing path, so the duplicate check and
/// the insert are one filesystem operation and racing inserts of the same
/// value admit exactly one winner.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, hash: &str) -> PathBuf {
        self.data_dir
            .join(format!("{RECORD_PREFIX}{hash}{RECORD_EXT}"))
    }

    fn read_record(&self, path: &Path) -> Result<StringRecord> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl RecordStore for FileStore {
    fn insert(&self, record: StringRecord) -> Result<StringRecord> {
        let path = self.record_path(&record.id);
        let payload = serde_json::to_string_pretty(&record)?;

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(StrandError::Conflict(record.value));
            }
            Err(err) => return Err(err.into()),
        };
        // A failed write must not leave a partial record behind
        if let Err(err) = file.write_all(payload.as_bytes()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(err.into());
        }
        log::debug!("stored record {} at {}", record.id, path.display());
        Ok(record)
    }

    fn find_by_value(&self, value: &str) -> Result<Option<StringRecord>> {
        let path = self.record_path(&analyzer::content_hash(value));
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read_record(&path)?))
    }

    fn delete_by_value(&self, value: &str) -> Result<bool> {
        let path = self.record_path(&analyzer::content_hash(value));
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn query(&self, filter: &RecordFilter) -> Result<Vec<StringRecord>> {
        let mut matches = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(RECORD_PREFIX) || !name.ends_with(RECORD_EXT) {
                continue;
            }
            let record = self.read_record(&path)?;
            if filter.matches(&record.properties) {
                matches.push(record);
            }
        }
        sort_newest_first(&mut matches);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StringRecord;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    fn record(value: &str) -> StringRecord {
        StringRecord::new(value.to_string(), analyzer::analyze(value))
    }

    #[test]
    fn insert_writes_one_file_named_by_hash() {
        let (dir, store) = setup();
        let created = store.insert(record("hello")).unwrap();

        let expected = dir.path().join(format!("rec-{}.json", created.id));
        assert!(expected.exists());

        let on_disk: StringRecord =
            serde_json::from_str(&fs::read_to_string(&expected).unwrap()).unwrap();
        assert_eq!(on_disk.value, "hello");
        assert_eq!(on_disk.id, created.id);
    }

    #[test]
    fn duplicate_insert_is_a_conflict() {
        let (_dir, store) = setup();
        store.insert(record("racecar")).unwrap();
        let err = store.insert(record("racecar")).unwrap_err();
        assert!(matches!(err, StrandError::Conflict(_)));
        assert_eq!(store.query(&RecordFilter::default()).unwrap().len(), 1);
    }

    #[test]
    fn find_delete_and_missing_value() {
        let (_dir, store) = setup();
        store.insert(record("keep")).unwrap();

        assert!(store.find_by_value("keep").unwrap().is_some());
        assert!(store.find_by_value("missing").unwrap().is_none());

        assert!(store.delete_by_value("keep").unwrap());
        assert!(!store.delete_by_value("keep").unwrap());
        assert!(store.find_by_value("keep").unwrap().is_none());
    }

    #[test]
    fn query_ignores_unrelated_files() {
        let (dir, store) = setup();
        store.insert(record("only")).unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a record").unwrap();

        let all = store.query(&RecordFilter::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, "only");
    }

    #[test]
    fn query_filters_and_orders() {
        let (_dir, store) = setup();
        for value in ["noon", "hello", "level"] {
            store.insert(record(value)).unwrap();
        }
        let filter = RecordFilter {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let matches = store.query(&filter).unwrap();
        let values: Vec<&str> = matches.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["level", "noon"]);
    }
}
