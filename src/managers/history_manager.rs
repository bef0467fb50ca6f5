//! History Manager for FishBrowser.
//!
//! Implements `HistoryManagerTrait`: the history ledger, a recency-ordered
//! set of visited pages keyed by URL and capped at [`HISTORY_CAP`] entries.
//! Re-visiting a page bumps it to the front instead of adding a second entry.

use log::{debug, warn};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::storage::DurableStore;
use crate::types::history::{HistoryEntry, HISTORY_CAP};
use crate::types::page;

/// Millisecond-precision UTC timestamp, e.g. `2025-09-05T08:30:00.000Z`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Trait defining history ledger operations.
pub trait HistoryManagerTrait {
    /// Records a visit. Returns `None` when the URL is not recordable.
    fn record_visit(&mut self, url: &str, title: &str) -> Option<HistoryEntry>;
    /// Returns `true` when an entry was removed, `false` when none matched.
    fn delete_entry(&mut self, url: &str) -> bool;
    fn list_history(&self) -> Vec<HistoryEntry>;
}

/// History manager backed by the durable store.
pub struct HistoryManager<'a> {
    store: &'a DurableStore,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` using the provided store.
    pub fn new(store: &'a DurableStore) -> Self {
        Self { store }
    }

    /// Returns the current UTC time formatted for a history entry.
    pub fn now() -> String {
        OffsetDateTime::now_utc()
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|e| {
                warn!("Cannot format history timestamp: {}", e);
                String::new()
            })
    }
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a page visit: drops any existing entry for the same URL,
    /// prepends the new one and truncates to the cap. An empty title falls
    /// back to the URL.
    fn record_visit(&mut self, url: &str, title: &str) -> Option<HistoryEntry> {
        if !page::is_recordable(url) {
            return None;
        }

        let entry = HistoryEntry {
            url: url.to_string(),
            title: if title.trim().is_empty() {
                url.to_string()
            } else {
                title.to_string()
            },
            timestamp: Self::now(),
        };

        let mut history: Vec<HistoryEntry> = self.store.load();
        history.retain(|h| h.url != url);
        history.insert(0, entry.clone());
        history.truncate(HISTORY_CAP);
        self.store.save(&history);

        debug!("Recorded visit to {} ({} entries)", url, history.len());
        Some(entry)
    }

    fn delete_entry(&mut self, url: &str) -> bool {
        let mut history: Vec<HistoryEntry> = self.store.load();
        let before = history.len();
        history.retain(|h| h.url != url);
        self.store.save(&history);
        history.len() < before
    }

    /// Lists up to [`HISTORY_CAP`] entries, most recent first.
    fn list_history(&self) -> Vec<HistoryEntry> {
        let mut history: Vec<HistoryEntry> = self.store.load();
        history.truncate(HISTORY_CAP);
        history
    }
}
