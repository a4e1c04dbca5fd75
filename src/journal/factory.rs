//! Single construction point for new entries.

use crate::journal::entry::{Entry, Sentiment};
use chrono::Utc;

/// Builds fresh, undecorated entries.
///
/// The factory stamps the creation time itself; callers cannot supply one. It does
/// not call the sentiment provider: the sentiment (or its absence after a failed
/// lookup) is passed in as-is.
pub struct EntryFactory;

impl EntryFactory {
    /// Creates an entry stamped with the current UTC time, with no tag and no id.
    pub fn create(text: impl Into<String>, sentiment: Option<Sentiment>) -> Entry {
        Entry {
            id: None,
            text: text.into(),
            sentiment,
            timestamp: Utc::now(),
            tag: None,
        }
    }
}
