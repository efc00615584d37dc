//! # Album Store
//!
//! Ordered in-memory collection of albums.
//!
//! Insertion order is the listing order. Ids are unique: `append` checks
//! for an existing id and pushes under the same write guard.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{AlbumError, AlbumResult};
use super::model::{seed_albums, Album};

/// Album store shared by all request handlers
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default catalog
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// Create a store holding `albums` in the given order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Snapshot of every album in insertion order
    pub fn list(&self) -> Vec<Album> {
        self.read().clone()
    }

    /// Add an album at the end of the collection.
    ///
    /// Fails with `DuplicateId` if the id is taken; the store is left as is.
    pub fn append(&self, album: Album) -> AlbumResult<Album> {
        let mut albums = self.write();
        if albums.iter().any(|a| a.id == album.id) {
            return Err(AlbumError::DuplicateId(album.id));
        }
        albums.push(album.clone());
        Ok(album)
    }

    /// First album whose id matches
    pub fn find_by_id(&self, id: &str) -> Option<Album> {
        self.read().iter().find(|a| a.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: no guard is held across a step that can panic
    // mid-mutation.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Album>> {
        self.albums.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Album>> {
        self.albums.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_store_lists_in_order() {
        let store = AlbumStore::seeded();
        let ids: Vec<_> = store.list().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = AlbumStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_append_goes_to_end() {
        let store = AlbumStore::seeded();
        let album = Album::new("4", "X", "Y", 9.99);

        let created = store.append(album.clone()).unwrap();
        assert_eq!(created, album);

        let all = store.list();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&album));
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let store = AlbumStore::seeded();
        let before = store.list();

        let err = store
            .append(Album::new("2", "Other", "Someone", 1.0))
            .unwrap_err();
        assert_eq!(err, AlbumError::DuplicateId("2".to_string()));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_find_by_id() {
        let store = AlbumStore::seeded();
        let found = store.find_by_id("2").unwrap();
        assert_eq!(found.title, "Jeru");
        assert!(store.find_by_id("999").is_none());
    }

    #[test]
    fn test_find_first_match_wins() {
        let store = AlbumStore::with_albums(vec![
            Album::new("7", "First", "A", 1.0),
            Album::new("7", "Second", "B", 2.0),
        ]);
        assert_eq!(store.find_by_id("7").unwrap().title, "First");
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = AlbumStore::seeded();
        let snapshot = store.list();
        store.append(Album::new("4", "X", "Y", 9.99)).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_concurrent_appends_all_land() {
        let store = Arc::new(AlbumStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        let id = format!("{}-{}", t, i);
                        store.append(Album::new(id, "T", "A", 1.0)).unwrap();
                        let _ = store.list();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
    }

    #[test]
    fn test_concurrent_duplicate_appends_only_one_wins() {
        let store = Arc::new(AlbumStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.append(Album::new("same", "T", "A", 1.0)).is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(store.len(), 1);
    }
}
