//! Listing and searching stored entries.

use crate::errors::{AppError, AppResult};
use crate::journal::{Entry, SentimentLabel};
use crate::store::EntryStore;
use tracing::info;

/// All entries, newest first.
pub fn list_entries<S: EntryStore + ?Sized>(store: &S) -> AppResult<Vec<Entry>> {
    Ok(store.list_all()?)
}

/// Entries carrying the given canonical sentiment label.
///
/// # Errors
///
/// Returns `AppError::Validation` if `label` is not exactly `positive`, `neutral`
/// or `negative`; the store is not queried in that case.
pub fn search_by_sentiment<S: EntryStore + ?Sized>(store: &S, label: &str) -> AppResult<Vec<Entry>> {
    let label: SentimentLabel = label.parse().map_err(AppError::Validation)?;
    let entries = store.find_by_label(label.as_str())?;
    info!("Found {} {} entries", entries.len(), label);
    Ok(entries)
}

/// Entries whose text contains `phrase`, ignoring case.
///
/// # Errors
///
/// Returns `AppError::Validation` if the phrase is blank. Otherwise the phrase is
/// matched as given, surrounding spaces included.
pub fn search_by_keyword<S: EntryStore + ?Sized>(store: &S, phrase: &str) -> AppResult<Vec<Entry>> {
    if phrase.trim().is_empty() {
        return Err(AppError::Validation("search phrase is empty".to_string()));
    }
    let entries = store.find_by_keyword(phrase)?;
    info!("Found {} entries matching the phrase", entries.len());
    Ok(entries)
}
