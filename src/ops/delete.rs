//! Removing entries.

use crate::errors::{AppError, AppResult};
use crate::journal::{Entry, EntryId};
use crate::store::EntryStore;
use tracing::info;

/// Deletes an entry by id, returning whether it existed.
pub fn delete_entry<S: EntryStore + ?Sized>(store: &S, id: EntryId) -> AppResult<bool> {
    let removed = store.delete(id)?;
    if removed {
        info!(entry_id = %id, "Entry deleted");
    } else {
        info!(entry_id = %id, "No entry to delete");
    }
    Ok(removed)
}

/// Resolves a listing number to the entry it names.
///
/// Listings number entries so that the newest has the highest number: in a list of
/// `n` entries (newest first), entry `#n` is at index 0 and `#1` is the oldest.
///
/// # Errors
///
/// Returns `AppError::Validation` if the selection is not a number or is out of range.
pub fn select_entry<'a>(entries: &'a [Entry], selection: &str) -> AppResult<&'a Entry> {
    let number: usize = selection
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("'{}' is not an entry number", selection.trim())))?;

    if number == 0 || number > entries.len() {
        return Err(AppError::Validation(format!(
            "entry number must be between 1 and {}",
            entries.len()
        )));
    }

    Ok(&entries[entries.len() - number])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{EntryFactory, TaggingDecorator};
    use crate::store::SqliteStore;

    fn entries(texts: &[&str]) -> Vec<Entry> {
        texts
            .iter()
            .map(|t| EntryFactory::create(*t, None))
            .collect()
    }

    #[test]
    fn test_select_entry_numbers_newest_highest() {
        let list = entries(&["newest", "middle", "oldest"]);
        assert_eq!(select_entry(&list, "3").unwrap().text, "newest");
        assert_eq!(select_entry(&list, " 1 ").unwrap().text, "oldest");
    }

    #[test]
    fn test_select_entry_rejects_bad_input() {
        let list = entries(&["only"]);
        assert!(matches!(select_entry(&list, "0"), Err(AppError::Validation(_))));
        assert!(matches!(select_entry(&list, "2"), Err(AppError::Validation(_))));
        assert!(matches!(select_entry(&list, "two"), Err(AppError::Validation(_))));
        assert!(matches!(select_entry(&list, "-1"), Err(AppError::Validation(_))));
        assert!(matches!(select_entry(&[], "1"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_delete_unknown_and_existing() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(!delete_entry(&store, EntryId::new(41)).unwrap());

        let mut entry = EntryFactory::create("to remove", None);
        TaggingDecorator::add_tag(&mut entry);
        let id = store.insert(&entry).unwrap();

        assert!(delete_entry(&store, id).unwrap());
        assert!(store.fetch(id).unwrap().is_none());
    }
}
