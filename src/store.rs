//! The entry store capability.
//!
//! [`EntryStore`] is the persistence contract the journal depends on;
//! [`SqliteStore`] implements it over the pooled SQLite [`Database`].

use crate::db::{entries, Database};
use crate::errors::{AppResult, StoreResult};
use crate::journal::{Entry, EntryId};
use std::path::Path;

/// Persistence and queries for journal entries.
///
/// Every listing is ordered newest timestamp first, ties in insertion order.
/// Lookups and deletes of unknown ids are not errors.
pub trait EntryStore {
    /// Stores a tagged entry and returns the id assigned to it.
    fn insert(&self, entry: &Entry) -> StoreResult<EntryId>;

    /// Point lookup by id.
    fn fetch(&self, id: EntryId) -> StoreResult<Option<Entry>>;

    /// Total number of stored entries.
    fn count(&self) -> StoreResult<usize>;

    /// All entries, newest first.
    fn list_all(&self) -> StoreResult<Vec<Entry>>;

    /// Entries whose sentiment label equals `label` exactly.
    fn find_by_label(&self, label: &str) -> StoreResult<Vec<Entry>>;

    /// Entries whose text contains `phrase`, case-insensitively.
    fn find_by_keyword(&self, phrase: &str) -> StoreResult<Vec<Entry>>;

    /// Removes an entry, returning whether one was removed.
    fn delete(&self, id: EntryId) -> StoreResult<bool>;
}

/// SQLite-backed entry store.
///
/// Each operation checks out its own pooled connection and returns it when the
/// operation ends, whether it succeeded or not.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Wraps an opened database, initializing the schema.
    pub fn new(db: Database) -> AppResult<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        Self::new(Database::open(path)?)
    }

    /// A store backed by a private in-memory database.
    pub fn in_memory() -> AppResult<Self> {
        Self::new(Database::open_in_memory()?)
    }
}

impl EntryStore for SqliteStore {
    fn insert(&self, entry: &Entry) -> StoreResult<EntryId> {
        let conn = self.db.get_conn()?;
        entries::insert_entry(&conn, entry)
    }

    fn fetch(&self, id: EntryId) -> StoreResult<Option<Entry>> {
        let conn = self.db.get_conn()?;
        entries::get_entry(&conn, id)
    }

    fn count(&self) -> StoreResult<usize> {
        let conn = self.db.get_conn()?;
        entries::count_entries(&conn)
    }

    fn list_all(&self) -> StoreResult<Vec<Entry>> {
        let conn = self.db.get_conn()?;
        entries::list_entries(&conn)
    }

    fn find_by_label(&self, label: &str) -> StoreResult<Vec<Entry>> {
        let conn = self.db.get_conn()?;
        entries::list_entries_with_label(&conn, label)
    }

    fn find_by_keyword(&self, phrase: &str) -> StoreResult<Vec<Entry>> {
        let conn = self.db.get_conn()?;
        entries::list_entries_containing(&conn, phrase)
    }

    fn delete(&self, id: EntryId) -> StoreResult<bool> {
        let conn = self.db.get_conn()?;
        entries::delete_entry(&conn, id)
    }
}

impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn insert(&self, entry: &Entry) -> StoreResult<EntryId> {
        (**self).insert(entry)
    }

    fn fetch(&self, id: EntryId) -> StoreResult<Option<Entry>> {
        (**self).fetch(id)
    }

    fn count(&self) -> StoreResult<usize> {
        (**self).count()
    }

    fn list_all(&self) -> StoreResult<Vec<Entry>> {
        (**self).list_all()
    }

    fn find_by_label(&self, label: &str) -> StoreResult<Vec<Entry>> {
        (**self).find_by_label(label)
    }

    fn find_by_keyword(&self, phrase: &str) -> StoreResult<Vec<Entry>> {
        (**self).find_by_keyword(phrase)
    }

    fn delete(&self, id: EntryId) -> StoreResult<bool> {
        (**self).delete(id)
    }
}
