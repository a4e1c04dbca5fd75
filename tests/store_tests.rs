//! Integration tests for the SQLite entry store.
//!
//! These tests exercise the store contract against a database file on disk:
//! ordering, filters, point lookups, deletes and id assignment.


use aura::{EntryId, EntryStore, MoodTag, SqliteStore};
use tempfile::TempDir;
use test_helpers::{at_minute, tagged_entry};

fn open_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("journal.db")).expect("open store")
}

#[test]
fn test_list_all_is_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    // Inserted out of chronological order on purpose.
    store.insert(&tagged_entry("t2", None, at_minute(2))).unwrap();
    store.insert(&tagged_entry("t1", None, at_minute(1))).unwrap();
    store.insert(&tagged_entry("t3", None, at_minute(3))).unwrap();

    let texts: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert_eq!(texts, vec!["t3", "t2", "t1"]);
}

#[test]
fn test_filters_share_list_order() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .insert(&tagged_entry("old good life", Some(("positive", 0.6)), at_minute(1)))
        .unwrap();
    store
        .insert(&tagged_entry("new good life", Some(("positive", 0.9)), at_minute(5)))
        .unwrap();
    store
        .insert(&tagged_entry("neutral life", Some(("neutral", 0.5)), at_minute(3)))
        .unwrap();

    let positive: Vec<String> = store
        .find_by_label("positive")
        .unwrap()
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert_eq!(positive, vec!["new good life", "old good life"]);

    let life: Vec<String> = store
        .find_by_keyword("LIFE")
        .unwrap()
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert_eq!(life, vec!["new good life", "neutral life", "old good life"]);
}

#[test]
fn test_keyword_is_case_insensitive_substring() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store
        .insert(&tagged_entry("Life is good", None, at_minute(1)))
        .unwrap();
    store
        .insert(&tagged_entry("nothing relevant", None, at_minute(2)))
        .unwrap();

    let found = store.find_by_keyword("life").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "Life is good");
}

#[test]
fn test_label_filter_skips_unrated_entries() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store.insert(&tagged_entry("offline", None, at_minute(1))).unwrap();
    store
        .insert(&tagged_entry("odd label", Some(("LABEL_3", 0.9)), at_minute(2)))
        .unwrap();

    assert!(store.find_by_label("neutral").unwrap().is_empty());
    assert_eq!(store.find_by_label("LABEL_3").unwrap().len(), 1);
}

#[test]
fn test_delete_then_fetch() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    assert!(!store.delete(EntryId::new(12345)).unwrap());

    let id = store
        .insert(&tagged_entry("short lived", Some(("negative", 0.95)), at_minute(1)))
        .unwrap();
    let fetched = store.fetch(id).unwrap().expect("entry stored");
    assert_eq!(fetched.tag, Some(MoodTag::NeedsAttention));

    assert!(store.delete(id).unwrap());
    assert!(store.fetch(id).unwrap().is_none());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let id = {
        let store = open_store(&dir);
        store
            .insert(&tagged_entry("persisted", Some(("neutral", 0.4)), at_minute(7)))
            .unwrap()
    };

    let store = open_store(&dir);
    let entry = store.fetch(id).unwrap().expect("entry survives reopen");
    assert_eq!(entry.text, "persisted");
    assert_eq!(entry.timestamp, at_minute(7));
    assert_eq!(entry.sentiment_label(), Some("neutral"));
    assert_eq!(entry.sentiment_score(), Some(0.4));
    assert_eq!(entry.tag, Some(MoodTag::Neutral));
}

#[test]
fn test_every_stored_entry_pairs_label_and_score() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store.insert(&tagged_entry("a", None, at_minute(1))).unwrap();
    store
        .insert(&tagged_entry("b", Some(("positive", 0.8)), at_minute(2)))
        .unwrap();

    for entry in store.list_all().unwrap() {
        assert_eq!(entry.sentiment_label().is_some(), entry.sentiment_score().is_some());
        assert!(entry.tag.is_some());
        assert!(entry.id.is_some());
    }
}
