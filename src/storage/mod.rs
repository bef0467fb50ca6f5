//! Durable storage for FishBrowser.
//!
//! Each persisted record lives in its own named slot (one JSON document per
//! slot). [`DurableStore`] is fail-soft: read, parse and write failures are
//! logged and degrade to the slot's default value.

pub mod durable_store;
pub mod file_store;
pub mod memory_store;
pub mod slot;

pub use durable_store::DurableStore;
pub use file_store::FileStorage;
pub use memory_store::MemoryStorage;
pub use slot::{Slot, SlotRecord, SlotStorage};
