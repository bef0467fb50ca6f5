use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;
use crate::types::history::HistoryEntry;
use crate::types::window::{Opacity, WindowSize};

/// A named persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Bookmarks,
    History,
    Opacity,
    WindowSize,
}

impl Slot {
    /// File name of the slot inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Slot::Bookmarks => "bookmarks.json",
            Slot::History => "history.json",
            Slot::Opacity => "opacity.json",
            Slot::WindowSize => "windowSize.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Bookmarks => "bookmarks",
            Slot::History => "history",
            Slot::Opacity => "opacity",
            Slot::WindowSize => "windowSize",
        }
    }
}

/// Raw byte-level access to slots. Implementations only move text around;
/// parsing and fallbacks belong to [`super::DurableStore`].
pub trait SlotStorage: Send {
    /// Returns `Ok(None)` when the slot has never been written.
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError>;
    /// Replaces the whole slot content.
    fn write(&self, slot: Slot, contents: &str) -> Result<(), StorageError>;
    /// Human-readable location, used in log lines.
    fn describe(&self, slot: Slot) -> String;
}

/// A value that lives in a slot, together with the default used whenever the
/// slot is missing or unreadable.
pub trait SlotRecord: Serialize + DeserializeOwned {
    const SLOT: Slot;

    fn fallback() -> Self;
}

/// `bookmarks.json` defaults to an empty ledger.
impl SlotRecord for Vec<Bookmark> {
    const SLOT: Slot = Slot::Bookmarks;

    fn fallback() -> Self {
        Vec::new()
    }
}

/// `history.json` defaults to an empty ledger.
impl SlotRecord for Vec<HistoryEntry> {
    const SLOT: Slot = Slot::History;

    fn fallback() -> Self {
        Vec::new()
    }
}

/// `opacity.json` defaults to fully opaque.
impl SlotRecord for Opacity {
    const SLOT: Slot = Slot::Opacity;

    fn fallback() -> Self {
        Opacity::default()
    }
}

/// `windowSize.json` defaults to unset; the caller computes a size from the
/// work area.
impl SlotRecord for Option<WindowSize> {
    const SLOT: Slot = Slot::WindowSize;

    fn fallback() -> Self {
        None
    }
}
