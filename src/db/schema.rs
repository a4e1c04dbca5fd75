//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for journal entries.

use crate::errors::StoreResult;
use rusqlite::Connection;
use tracing::debug;

/// Current schema version, recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// `AUTOINCREMENT` keeps ids from ever being reused after a delete. The CHECK
/// constraints keep label and score both present or both absent, and the score
/// within `[0, 1]`. Timestamps are fixed-width RFC 3339 text, so ordering by the
/// column is chronological.
pub fn create_tables(conn: &Connection) -> StoreResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            sentiment_label TEXT,
            sentiment_score REAL,
            timestamp TEXT NOT NULL,
            tag TEXT NOT NULL,
            CHECK ((sentiment_label IS NULL) = (sentiment_score IS NULL)),
            CHECK (sentiment_score IS NULL OR (sentiment_score >= 0.0 AND sentiment_score <= 1.0))
        );

        CREATE INDEX IF NOT EXISTS idx_entries_timestamp ON entries(timestamp DESC);
        CREATE INDEX IF NOT EXISTS idx_entries_sentiment_label ON entries(sentiment_label);
        "#,
    )?;

    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_sets_version() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_label_without_score_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO entries (text, sentiment_label, timestamp, tag) VALUES ('x', 'positive', '2024-01-01T00:00:00.000000000Z', 'positive')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO entries (text, sentiment_score, timestamp, tag) VALUES ('x', 0.5, '2024-01-01T00:00:00.000000000Z', 'unrated')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO entries (text, sentiment_label, sentiment_score, timestamp, tag) VALUES ('x', 'positive', 1.5, '2024-01-01T00:00:00.000000000Z', 'very positive')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_tag_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO entries (text, timestamp) VALUES ('x', '2024-01-01T00:00:00.000000000Z')",
            [],
        );
        assert!(result.is_err());
    }
}
