//! FishBrowser: a translucent single-window browser with bookmarks, history
//! and adjustable opacity.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod config;
pub mod event_router;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
