//! Window State Manager for FishBrowser.
//!
//! Tracks the two window singletons: opacity and window size. Both are
//! overwritten on every change and never historized.

use log::debug;

use crate::storage::DurableStore;
use crate::types::window::{Opacity, WindowSize};

/// Trait defining window-state operations.
pub trait WindowStateManagerTrait {
    fn get_opacity(&self) -> Opacity;
    /// Clamps, persists and returns the applied opacity.
    fn set_opacity(&mut self, value: f64) -> Opacity;
    /// `set_opacity(current + delta)`.
    fn adjust_opacity(&mut self, delta: f64) -> Opacity;
    /// `None` means no size has been stored; the caller picks a default.
    fn get_window_size(&self) -> Option<WindowSize>;
    /// Persists a new window size. Zero-sized reports are ignored.
    fn record_resize(&mut self, size: WindowSize) -> bool;
}

/// Window state manager backed by the durable store.
pub struct WindowStateManager<'a> {
    store: &'a DurableStore,
}

impl<'a> WindowStateManager<'a> {
    pub fn new(store: &'a DurableStore) -> Self {
        Self { store }
    }
}

impl<'a> WindowStateManagerTrait for WindowStateManager<'a> {
    fn get_opacity(&self) -> Opacity {
        self.store.load()
    }

    fn set_opacity(&mut self, value: f64) -> Opacity {
        let opacity = Opacity::new(value);
        self.store.save(&opacity);
        debug!("Opacity set to {}%", opacity.percent());
        opacity
    }

    fn adjust_opacity(&mut self, delta: f64) -> Opacity {
        let next = self.get_opacity().adjusted(delta);
        self.set_opacity(next.value())
    }

    fn get_window_size(&self) -> Option<WindowSize> {
        self.store.load()
    }

    fn record_resize(&mut self, size: WindowSize) -> bool {
        if !size.is_valid() {
            return false;
        }
        self.store.save(&Some(size))
    }
}
