//! End-to-end tests for the `aura` binary.
//!
//! The inference API is pointed at an unreachable address, so every entry added
//! here exercises the degrade-to-unrated path.


use predicates::prelude::*;
use tempfile::TempDir;
use test_helpers::base_aura_command;

#[test]
fn test_missing_token_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut cmd = base_aura_command(&dir.path().join("journal.db"));
    cmd.env_remove("HF_TOKEN");

    cmd.write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HF_TOKEN"));
}

#[test]
fn test_quit_immediately() {
    let dir = TempDir::new().unwrap();
    let mut cmd = base_aura_command(&dir.path().join("journal.db"));

    cmd.write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== AURA Journaling CLI ==="))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_empty_journal_listing() {
    let dir = TempDir::new().unwrap();
    let mut cmd = base_aura_command(&dir.path().join("journal.db"));

    cmd.write_stdin("2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_entry_saved_unrated_when_api_unreachable() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("journal.db");

    base_aura_command(&db_path)
        .write_stdin("1\nLife is good\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentiment analysis unavailable"))
        .stdout(predicate::str::contains("Tag: unrated"))
        .stdout(predicate::str::contains("Saved entry with id: 1"))
        .stderr(predicate::str::contains("Sentiment analysis failed"))
        .stderr(predicate::str::contains("Entry saved").not());

    // A second run sees the entry persisted.
    base_aura_command(&db_path)
        .write_stdin("2\n4\nlife\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 1"))
        .stdout(predicate::str::contains("  Text: Life is good"))
        .stdout(predicate::str::contains("Found 1 entries."))
        .stdout(predicate::str::contains("Most common mood: n/a"));
}

#[test]
fn test_db_flag_overrides_env() {
    let dir = TempDir::new().unwrap();
    let env_db = dir.path().join("env.db");
    let flag_db = dir.path().join("flag").join("journal.db");

    base_aura_command(&env_db)
        .arg("--db")
        .arg(&flag_db)
        .write_stdin("7\n")
        .assert()
        .success();

    assert!(flag_db.exists());
    assert!(!env_db.exists());
}

#[test]
fn test_invalid_log_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    base_aura_command(&dir.path().join("journal.db"))
        .arg("--log-format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_delete_flow_end_to_end() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("journal.db");

    base_aura_command(&db_path)
        .write_stdin("1\nfirst thought\n1\nsecond thought\n5\n7\ny\n5\n2\ny\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry number must be between 1 and 2"))
        .stdout(predicate::str::contains("Entry deleted."))
        .stdout(predicate::str::contains("Total entries: 1"))
        .stdout(predicate::str::contains("  Text: first thought"));
}
