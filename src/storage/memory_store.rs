use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::slot::{Slot, SlotStorage};
use crate::types::errors::StorageError;

/// Slot storage kept in memory. Used by tests and the console demo.
///
/// Clones share the same slots, so a test can keep a handle and inspect what
/// a [`super::DurableStore`] wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<Slot, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, for exercising the fail-soft paths.
    pub fn read_only() -> Self {
        Self {
            slots: Arc::default(),
            read_only: true,
        }
    }

    /// Seeds a slot with raw text, bypassing serialization.
    pub fn with_raw(self, slot: Slot, contents: &str) -> Self {
        self.set_raw(slot, contents);
        self
    }

    /// Overwrites a slot with raw text, bypassing serialization.
    pub fn set_raw(&self, slot: Slot, contents: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(slot, contents.to_string());
        }
    }

    /// Returns the raw text currently held by a slot.
    pub fn raw(&self, slot: Slot) -> Option<String> {
        self.slots.lock().ok().and_then(|slots| slots.get(&slot).cloned())
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
        Ok(slots.get(&slot).cloned())
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed(format!(
                "{} is read-only",
                self.describe(slot)
            )));
        }
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        slots.insert(slot, contents.to_string());
        Ok(())
    }

    fn describe(&self, slot: Slot) -> String {
        format!("memory:{}", slot.name())
    }
}
