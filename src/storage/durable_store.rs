use std::path::Path;

use log::{debug, warn};

use super::file_store::FileStorage;
use super::memory_store::MemoryStorage;
use super::slot::{SlotRecord, SlotStorage};

/// Fail-soft typed access to slots.
///
/// `load` never fails: a missing slot, an unreadable file or malformed content
/// all yield [`SlotRecord::fallback`]. `save` reports success as a `bool`;
/// failures are logged and otherwise swallowed.
pub struct DurableStore {
    storage: Box<dyn SlotStorage>,
}

impl DurableStore {
    pub fn new<S: SlotStorage + 'static>(storage: S) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Opens a store backed by one JSON file per slot in `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(FileStorage::new(dir))
    }

    /// Opens a store that keeps everything in memory.
    pub fn open_in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Loads the record of type `T` from its slot, or its default.
    pub fn load<T: SlotRecord>(&self) -> T {
        let slot = T::SLOT;
        let contents = match self.storage.read(slot) {
            Ok(Some(contents)) => contents,
            Ok(None) => return T::fallback(),
            Err(e) => {
                warn!("Failed to read {}: {}", self.storage.describe(slot), e);
                return T::fallback();
            }
        };

        match serde_json::from_str(contents.trim()) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Ignoring malformed {} ({}), using default",
                    self.storage.describe(slot),
                    e
                );
                T::fallback()
            }
        }
    }

    /// Overwrites the slot of type `T`. Returns whether the write succeeded.
    pub fn save<T: SlotRecord>(&self, value: &T) -> bool {
        let slot = T::SLOT;
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize {}: {}", slot.name(), e);
                return false;
            }
        };

        match self.storage.write(slot, &json) {
            Ok(()) => {
                debug!("Saved {} ({} bytes)", slot.name(), json.len());
                true
            }
            Err(e) => {
                warn!("Failed to save {}: {}", self.storage.describe(slot), e);
                false
            }
        }
    }
}
