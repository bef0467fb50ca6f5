//! Bookmark Manager for FishBrowser.
//!
//! Implements `BookmarkManagerTrait`: the bookmark ledger, an ordered,
//! URL-keyed list, most-recently-added first, persisted as a whole on every
//! mutation through the durable store.

use log::debug;

use crate::storage::DurableStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::page;

/// Trait defining bookmark ledger operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<Bookmark, BookmarkError>;
    /// Returns `true` when a bookmark was removed, `false` when none matched.
    fn remove_bookmark(&mut self, url: &str) -> bool;
    fn list_bookmarks(&self) -> Vec<Bookmark>;
    fn contains(&self, url: &str) -> bool;
}

/// Bookmark manager backed by the durable store.
pub struct BookmarkManager<'a> {
    store: &'a DurableStore,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided store.
    pub fn new(store: &'a DurableStore) -> Self {
        Self { store }
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Adds `url` at the front of the ledger, replacing any bookmark with the
    /// same URL. Local files, the blank page and empty URLs are rejected.
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<Bookmark, BookmarkError> {
        if !page::is_recordable(url) {
            return Err(BookmarkError::InvalidTarget(url.to_string()));
        }

        let bookmark = Bookmark::new(url, title);
        let mut bookmarks: Vec<Bookmark> = self.store.load();
        bookmarks.retain(|b| b.url != url);
        bookmarks.insert(0, bookmark.clone());
        self.store.save(&bookmarks);

        debug!("Bookmarked {} ({} total)", url, bookmarks.len());
        Ok(bookmark)
    }

    fn remove_bookmark(&mut self, url: &str) -> bool {
        let mut bookmarks: Vec<Bookmark> = self.store.load();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.url != url);
        self.store.save(&bookmarks);

        let removed = bookmarks.len() < before;
        if !removed {
            debug!("No bookmark for {}, nothing removed", url);
        }
        removed
    }

    /// Lists bookmarks, most recently added first.
    fn list_bookmarks(&self) -> Vec<Bookmark> {
        self.store.load()
    }

    fn contains(&self, url: &str) -> bool {
        self.list_bookmarks().iter().any(|b| b.url == url)
    }
}
