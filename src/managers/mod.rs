// FishBrowser state managers
// Managers own the persisted ledgers and window state: bookmarks, history, opacity/size, shortcuts.

pub mod bookmark_manager;
pub mod history_manager;
pub mod shortcut_manager;
pub mod window_state_manager;
