//! Journaling a new entry.

use crate::errors::{AppError, AppResult};
use crate::journal::{Entry, EntryFactory, TaggingDecorator};
use crate::sentiment::SentimentProvider;
use crate::store::EntryStore;
use tracing::{info, warn};

/// Scores, builds, tags and stores a new entry.
///
/// # Flow
///
/// 1. Trim the text; reject it if nothing is left
/// 2. Ask the provider for sentiment, downgrading any failure to "no sentiment"
/// 3. Build the entry through the factory
/// 4. Tag it
/// 5. Insert it and record the assigned id
///
/// # Errors
///
/// Returns `AppError::Validation` for empty text (nothing is called or stored),
/// or a store error if the insert fails. Provider failures are never returned.
pub fn add_entry<P, S>(provider: &mut P, store: &S, text: &str) -> AppResult<Entry>
where
    P: SentimentProvider + ?Sized,
    S: EntryStore + ?Sized,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("entry text is empty".to_string()));
    }

    let sentiment = match provider.get_sentiment(text) {
        Ok(sentiment) => Some(sentiment),
        Err(e) => {
            warn!("Sentiment analysis failed, storing entry unrated: {}", e);
            None
        }
    };

    let mut entry = EntryFactory::create(text, sentiment);
    TaggingDecorator::add_tag(&mut entry);

    let id = store.insert(&entry)?;
    entry.id = Some(id);

    info!(entry_id = %id, tag = ?entry.tag, "Entry saved");
    Ok(entry)
}
