use std::sync::Arc;
use strand::api::StrandApi;
use strand::error::StrandError;
use strand::filter::RawFilter;
use strand::store::fs::FileStore;
use tempfile::TempDir;

fn setup() -> (TempDir, StrandApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf()).unwrap();
    (dir, StrandApi::new(store))
}

#[test]
fn test_submit_fetch_roundtrip_on_disk() {
    let (_dir, api) = setup();

    let created = api.submit("racecar").unwrap();
    assert_eq!(
        created.id,
        "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b"
    );

    // 1. Fetch reads back what was persisted, not an in-process copy
    let fetched = api.fetch("racecar").unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.properties, created.properties);
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn test_dedup_across_store_instances() {
    let dir = TempDir::new().unwrap();

    // First process writes the record
    {
        let api = StrandApi::new(FileStore::new(dir.path().to_path_buf()).unwrap());
        api.submit("persistent").unwrap();
    }

    // A fresh store over the same directory still sees it and refuses a dup
    let api = StrandApi::new(FileStore::new(dir.path().to_path_buf()).unwrap());
    let err = api.submit("persistent").unwrap_err();
    assert!(matches!(err, StrandError::Conflict(_)));
    assert_eq!(api.list(&RawFilter::default()).unwrap().count, 1);
}

#[test]
fn test_delete_then_not_found() {
    let (_dir, api) = setup();
    api.submit("here today").unwrap();

    api.remove("here today").unwrap();
    assert!(matches!(
        api.remove("here today"),
        Err(StrandError::NotFound(_))
    ));
    assert!(matches!(
        api.fetch("here today"),
        Err(StrandError::NotFound(_))
    ));
}

#[test]
fn test_structured_and_text_queries_agree() {
    let (_dir, api) = setup();
    for value in ["racecar", "noon", "not a palindrome"] {
        api.submit(value).unwrap();
    }

    let raw = RawFilter {
        is_palindrome: Some("true".into()),
        ..Default::default()
    };
    let structured = api.list(&raw).unwrap();
    let text = api.list_by_text("all palindromic strings").unwrap();

    assert_eq!(structured.count, 2);
    assert_eq!(structured.filter, text.filter);

    let structured_ids: Vec<&str> = structured.records.iter().map(|r| r.id.as_str()).collect();
    let text_ids: Vec<&str> = text.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(structured_ids, text_ids);
}

#[test]
fn test_list_orders_newest_first() {
    let (_dir, api) = setup();
    for value in ["oldest", "middle", "newest"] {
        api.submit(value).unwrap();
    }

    let outcome = api.list(&RawFilter::default()).unwrap();
    let values: Vec<&str> = outcome.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_concurrent_submits_admit_exactly_one() {
    let (_dir, api) = setup();
    let api = Arc::new(api);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = Arc::clone(&api);
            std::thread::spawn(move || api.submit("contested value"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(StrandError::Conflict(_))))
        .count();

    assert_eq!(wins, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(api.list(&RawFilter::default()).unwrap().count, 1);
}
