//! High-level journaling operations.
//!
//! The free functions in the submodules each implement one user-facing action
//! against any provider and store. [`Journal`] bundles a caching provider and a store
//! for a whole program run so the sentiment cache is shared across actions.

pub mod add;
pub mod delete;
pub mod search;

use crate::errors::AppResult;
use crate::journal::{Entry, EntryId};
use crate::report::MoodReport;
use crate::sentiment::{CachingSentimentProxy, SentimentProvider};
use crate::store::EntryStore;

pub use add::add_entry;
pub use delete::{delete_entry, select_entry};
pub use search::{list_entries, search_by_keyword, search_by_sentiment};

/// The journal service for one program run.
pub struct Journal<P, S> {
    sentiment: CachingSentimentProxy<P>,
    store: S,
}

impl<P: SentimentProvider, S: EntryStore> Journal<P, S> {
    /// Wraps `provider` in a fresh cache and pairs it with `store`.
    pub fn new(provider: P, store: S) -> Self {
        Self {
            sentiment: CachingSentimentProxy::new(provider),
            store,
        }
    }

    /// See [`add_entry`].
    pub fn add_entry(&mut self, text: &str) -> AppResult<Entry> {
        add::add_entry(&mut self.sentiment, &self.store, text)
    }

    pub fn list_entries(&self) -> AppResult<Vec<Entry>> {
        search::list_entries(&self.store)
    }

    /// See [`search_by_sentiment`].
    pub fn entries_with_label(&self, label: &str) -> AppResult<Vec<Entry>> {
        search::search_by_sentiment(&self.store, label)
    }

    /// See [`search_by_keyword`].
    pub fn entries_matching(&self, phrase: &str) -> AppResult<Vec<Entry>> {
        search::search_by_keyword(&self.store, phrase)
    }

    pub fn fetch_entry(&self, id: EntryId) -> AppResult<Option<Entry>> {
        Ok(self.store.fetch(id)?)
    }

    pub fn count_entries(&self) -> AppResult<usize> {
        Ok(self.store.count()?)
    }

    pub fn delete_entry(&self, id: EntryId) -> AppResult<bool> {
        delete::delete_entry(&self.store, id)
    }

    /// Mood statistics over every stored entry.
    pub fn mood_report(&self) -> AppResult<MoodReport> {
        let entries = self.store.list_all()?;
        Ok(MoodReport::from_entries(&entries))
    }

    /// The sentiment cache, for inspection.
    pub fn sentiment_cache(&self) -> &CachingSentimentProxy<P> {
        &self.sentiment
    }
}
