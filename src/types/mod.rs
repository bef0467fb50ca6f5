// FishBrowser shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod errors;
pub mod events;
pub mod history;
pub mod menu;
pub mod page;
pub mod window;
