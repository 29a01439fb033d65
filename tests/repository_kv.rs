mod common;

use common::{live_record, test_repository};
use urlstash::prelude::*;

#[test]
fn append_preserves_insertion_order() {
    let repo = test_repository();

    repo.append(vec![
        live_record("first123", "https://one.example"),
        live_record("second45", "https://two.example"),
    ])
    .unwrap();
    repo.append(vec![live_record("third678", "https://three.example")])
        .unwrap();

    let all = repo.list_all().unwrap();
    let codes: Vec<_> = all.iter().map(|r| r.shortcode.as_str()).collect();
    assert_eq!(codes, ["first123", "second45", "third678"]);
}

#[test]
fn find_by_code_returns_the_first_match() {
    let repo = test_repository();
    repo.append(vec![
        live_record("dupcode1", "https://first.example"),
        live_record("dupcode1", "https://second.example"),
    ])
    .unwrap();

    let found = repo.find_by_code("dupcode1").unwrap().unwrap();
    assert_eq!(found.long_url, "https://first.example");
}

#[test]
fn record_click_on_unknown_code_reports_no_match() {
    let repo = test_repository();

    let matched = repo
        .record_click("missing99", Click::now(sources::DIRECT_ACCESS))
        .unwrap();

    assert!(!matched);
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn record_click_touches_only_the_matching_record() {
    let repo = test_repository();
    repo.append(vec![
        live_record("target12", "https://one.example"),
        live_record("other345", "https://two.example"),
    ])
    .unwrap();

    let matched = repo
        .record_click("target12", Click::now(sources::DIRECT_ACCESS))
        .unwrap();
    assert!(matched);

    let all = repo.list_all().unwrap();
    assert_eq!(all[0].clicks, 1);
    assert_eq!(all[0].click_data.len(), 1);
    assert_eq!(all[1].clicks, 0);
}

#[test]
fn a_corrupt_stored_blob_reads_as_an_empty_collection() {
    let store = MemoryStore::new();
    store.set("shortenedUrls", "this is not json").unwrap();
    let repo = KvUrlRepository::new(store, "shortenedUrls");

    assert!(repo.list_all().unwrap().is_empty());

    // The next write replaces the corrupt blob.
    repo.append(vec![live_record("fresh123", "https://example.com")])
        .unwrap();
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn collections_survive_a_new_repository_over_the_same_store() {
    use std::sync::Arc;

    let store = Arc::new(MemoryStore::new());

    let writer = KvUrlRepository::new(SharedStore(store.clone()), "shortenedUrls");
    writer
        .append(vec![live_record("kept1234", "https://example.com")])
        .unwrap();

    let reader = KvUrlRepository::new(SharedStore(store), "shortenedUrls");
    let found = reader.find_by_code("kept1234").unwrap();
    assert!(found.is_some());
}

#[test]
fn overlapping_appends_and_clicks_lose_no_writes() {
    use std::sync::Arc;
    use std::thread;

    const THREADS: usize = 8;
    const CLICKS_PER_THREAD: u64 = 5;

    let repo = Arc::new(KvUrlRepository::new(MemoryStore::new(), "shortenedUrls"));
    repo.append(vec![live_record("shared001", "https://example.com")])
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let repo = repo.clone();
            thread::spawn(move || {
                repo.append(vec![live_record(
                    &format!("thread{i:03}"),
                    "https://example.com",
                )])
                .unwrap();
                for _ in 0..CLICKS_PER_THREAD {
                    let matched = repo
                        .record_click("shared001", Click::now(sources::DIRECT_ACCESS))
                        .unwrap();
                    assert!(matched);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1 + THREADS);

    let shared = repo.find_by_code("shared001").unwrap().unwrap();
    assert_eq!(shared.clicks, THREADS as u64 * CLICKS_PER_THREAD);
    assert_eq!(shared.click_data.len() as u64, shared.clicks);
}

/// Thin forwarding wrapper letting two repositories share one store.
struct SharedStore(std::sync::Arc<MemoryStore>);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.0.set(key, value)
    }
}
