//! Entry row operations.
//!
//! This module provides functions for inserting, reading, querying and deleting
//! journal entries. Every listing uses the same order: newest timestamp first, ties
//! in insertion order.

use crate::errors::{StoreError, StoreResult};
use crate::journal::{Entry, EntryId, MoodTag, Sentiment};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const SELECT_ENTRY: &str =
    "SELECT id, text, sentiment_label, sentiment_score, timestamp, tag FROM entries";

const NEWEST_FIRST: &str = "ORDER BY timestamp DESC, id ASC";

/// Encodes a timestamp as fixed-width RFC 3339 text with nanosecond precision.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn conversion_error(column: usize, ty: Type, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, ty, message.into())
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let label: Option<String> = row.get(2)?;
    let score: Option<f64> = row.get(3)?;
    let sentiment = match (label, score) {
        (Some(label), Some(score)) => Some(Sentiment { label, score }),
        (None, None) => None,
        _ => {
            return Err(conversion_error(
                2,
                Type::Text,
                "sentiment label and score must both be present or both absent".to_string(),
            ))
        }
    };

    let timestamp_text: String = row.get(4)?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_text)
        .map_err(|e| conversion_error(4, Type::Text, e.to_string()))?
        .with_timezone(&Utc);

    let tag_text: String = row.get(5)?;
    let tag = tag_text
        .parse::<MoodTag>()
        .map_err(|e| conversion_error(5, Type::Text, e))?;

    Ok(Entry {
        id: Some(EntryId::new(row.get(0)?)),
        text: row.get(1)?,
        sentiment,
        timestamp,
        tag: Some(tag),
    })
}

/// Inserts a tagged, not-yet-stored entry and returns its new id.
///
/// # Errors
///
/// Returns `StoreError::Untagged` if the entry has no tag,
/// `StoreError::AlreadyPersisted` if it already has an id,
/// or a SQLite error if the write fails.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> StoreResult<EntryId> {
    if let Some(id) = entry.id {
        return Err(StoreError::AlreadyPersisted(id));
    }
    let tag = entry.tag.ok_or(StoreError::Untagged)?;

    conn.execute(
        r#"
        INSERT INTO entries (text, sentiment_label, sentiment_score, timestamp, tag)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            entry.text,
            entry.sentiment_label(),
            entry.sentiment_score(),
            encode_timestamp(&entry.timestamp),
            tag.as_str(),
        ],
    )?;

    let id = EntryId::new(conn.last_insert_rowid());
    debug!("Entry inserted with id {}", id);
    Ok(id)
}

/// Retrieves an entry by id.
///
/// Returns `Ok(None)` if no entry has that id.
pub fn get_entry(conn: &Connection, id: EntryId) -> StoreResult<Option<Entry>> {
    debug!("Getting entry id {}", id);

    let entry = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_ENTRY),
            params![id.get()],
            entry_from_row,
        )
        .optional()?;
    Ok(entry)
}

/// Counts all stored entries.
pub fn count_entries(conn: &Connection) -> StoreResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Lists every entry, newest first.
pub fn list_entries(conn: &Connection) -> StoreResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!("{} {}", SELECT_ENTRY, NEWEST_FIRST))?;
    let entries = stmt
        .query_map([], entry_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Listed {} entries", entries.len());
    Ok(entries)
}

/// Lists entries whose sentiment label equals `label` exactly, newest first.
pub fn list_entries_with_label(conn: &Connection, label: &str) -> StoreResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE sentiment_label = ?1 {}",
        SELECT_ENTRY, NEWEST_FIRST
    ))?;
    let entries = stmt
        .query_map(params![label], entry_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Found {} entries labelled {}", entries.len(), label);
    Ok(entries)
}

/// Lists entries whose text contains `phrase`, ignoring case, newest first.
///
/// Matching is done in Rust rather than with `LIKE` so that case folding covers
/// non-ASCII text and `%`/`_` in the phrase are literal.
pub fn list_entries_containing(conn: &Connection, phrase: &str) -> StoreResult<Vec<Entry>> {
    let needle = phrase.to_lowercase();
    let entries: Vec<Entry> = list_entries(conn)?
        .into_iter()
        .filter(|entry| entry.text.to_lowercase().contains(&needle))
        .collect();

    debug!("Found {} entries containing the phrase", entries.len());
    Ok(entries)
}

/// Deletes an entry by id, returning whether a row was removed.
pub fn delete_entry(conn: &Connection, id: EntryId) -> StoreResult<bool> {
    let removed = conn.execute("DELETE FROM entries WHERE id = ?1", params![id.get()])?;
    debug!("Delete of entry {} removed {} rows", id, removed);
    Ok(removed > 0)
}
